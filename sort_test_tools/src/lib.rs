/// A sort implementation that can be driven by the pattern based test suite and the benchmarks.
///
/// Host arrays only ever carry `jint` values, so implementations are specialized to `i32`.
pub trait Sort {
    fn name() -> String;

    fn sort(arr: &mut [i32]);
}

/// Same check the JVM side harness runs on every returned array.
pub fn is_sorted(arr: &[i32]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

pub mod patterns;
