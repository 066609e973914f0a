use std::sync::Once;

use jni_sort::unstable::rust_std;
use jni_sort::{sort_array, ArraySorter, HostIntArray, SortError};
use sort_test_tools::{is_sorted, patterns};

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn sorted(values: Vec<i32>) -> Vec<i32> {
    sort_array(HostIntArray::new(values))
        .unwrap()
        .into_vec()
        .unwrap()
}

#[test]
fn known_results() {
    init_tracing();

    assert_eq!(sorted(vec![]), Vec::<i32>::new());
    assert_eq!(sorted(vec![5]), vec![5]);
    assert_eq!(sorted(vec![3, 1, 2]), vec![1, 2, 3]);
    assert_eq!(sorted(vec![4, 2, 4, 1]), vec![1, 2, 4, 4]);
    assert_eq!(
        sorted(vec![0, i32::MAX, -7, i32::MIN, -7]),
        vec![i32::MIN, -7, -7, 0, i32::MAX]
    );
}

#[test]
fn empty_and_singleton_still_borrow_and_release() {
    init_tracing();

    for values in [vec![], vec![42]] {
        let expected = values.clone();
        let host = sort_array(HostIntArray::new(values)).unwrap();

        assert_eq!(host.acquire_count(), 1);
        assert_eq!(host.release_count(), 1);
        assert_eq!(host.as_slice(), Some(expected.as_slice()));
    }
}

#[test]
fn null_handle_is_invalid_argument() {
    init_tracing();

    let mut host = HostIntArray::null();
    let err = sort_array(&mut host).unwrap_err();

    assert!(matches!(err, SortError::InvalidArgument { .. }));
    assert!(host.is_null());
    assert_eq!(host.acquire_count(), 0);
    assert_eq!(host.release_count(), 0);
}

#[test]
fn returns_the_same_slice() {
    init_tracing();

    let mut values = vec![9, -1, 5, 5, 0];
    let ptr = values.as_ptr();

    let returned = sort_array(values.as_mut_slice()).unwrap();
    assert_eq!(returned.as_ptr(), ptr);
    assert_eq!(returned, &[-1, 0, 5, 5, 9]);
}

#[test]
fn borrowed_host_array_is_sorted_in_place() {
    init_tracing();

    let mut host = HostIntArray::new(patterns::random(1_000));
    let sorter = ArraySorter::<rust_std::SortImpl>::new();

    sorter.sort(&mut host).unwrap();
    sorter.sort(&mut host).unwrap();

    assert!(is_sorted(host.as_slice().unwrap()));
    assert_eq!(host.acquire_count(), 2);
    assert_eq!(host.release_count(), 2);
}

#[test]
fn sort_is_idempotent_and_keeps_length() {
    init_tracing();

    for len in [0, 1, 2, 17, 500, 10_000] {
        let input = patterns::random_uniform(len, -100..100);

        let once = sorted(input.clone());
        let twice = sorted(once.clone());

        assert_eq!(once.len(), input.len());
        assert_eq!(once, twice);

        let mut expected = input;
        expected.sort();
        assert_eq!(once, expected);
    }
}
