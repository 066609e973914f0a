//! Native side of `TestSort.sortTest(int[])`.
//!
//! The JVM hands over an `int[]`, the array is borrowed as a mutable `[i32]` view, sorted
//! ascending and committed back before the same array reference is returned.
//!
//! The borrow is abstracted by [`IntArrayHandle`], so the same sort path runs against a JVM
//! array ([`jni_bridge::JniIntArray`]), a plain slice, or a [`HostIntArray`] in tests.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(arr: &mut [i32]) {
                sort(arr);
            }
        }
    };
}

#[macro_use]
pub mod ffi_util;

pub mod array;
pub mod error;
pub mod sorter;
pub mod unstable;

#[cfg(feature = "jni")]
pub mod jni_bridge;

pub use array::{HostIntArray, IntArrayHandle};
pub use error::SortError;
pub use sort_test_tools::Sort;
pub use sorter::{sort_array, ArraySorter};

/// Backend used by the exported native method.
#[cfg(feature = "cpp_std_sys")]
pub type DefaultSort = unstable::cpp_std_sys::SortImpl;

/// Backend used by the exported native method.
#[cfg(not(feature = "cpp_std_sys"))]
pub type DefaultSort = unstable::rust_std::SortImpl;
