#![allow(unused_macros)] // Dependent on optional features.

/// Declares `<prefix>_i32` from a C++ translation unit and wraps it as a `SortImpl`.
macro_rules! ffi_sort_impl {
    (
        $name:expr,
        $sort_name_prefix:ident
    ) => {
        sort_impl!($name);

        paste::paste! {
            extern "C" {
                fn [<$sort_name_prefix _i32>](data: *mut i32, len: usize);
            }

            #[inline]
            pub fn sort(data: &mut [i32]) {
                // SAFETY: the C++ side only touches `data[0..len]` and keeps no pointer into it
                // after returning.
                unsafe {
                    [<$sort_name_prefix _i32>](data.as_mut_ptr(), data.len());
                }
            }
        } // paste
    };
}
