sort_impl!("rust_std_unstable");

#[inline]
pub fn sort(v: &mut [i32]) {
    v.sort_unstable();
}
