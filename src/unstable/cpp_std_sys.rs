ffi_sort_impl!("cpp_std_sys_unstable", cpp_std_sys_unstable);
