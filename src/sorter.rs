use std::marker::PhantomData;

use tracing::debug;

use crate::array::IntArrayHandle;
use crate::error::SortError;
use crate::{DefaultSort, Sort};

/// Sorts a borrowed host array in place with the backend `S` and hands the same handle back.
pub struct ArraySorter<S: Sort> {
    _sort: PhantomData<fn() -> S>,
}

impl<S: Sort> ArraySorter<S> {
    pub fn new() -> Self {
        Self { _sort: PhantomData }
    }

    /// Acquire, sort ascending, commit and release.
    ///
    /// A null or unreadable handle yields `InvalidArgument` before anything is borrowed, so
    /// the array is left untouched. Once the view is acquired it is released when it goes
    /// out of scope, whether the sort returns or unwinds.
    pub fn sort<H: IntArrayHandle>(&self, mut array: H) -> Result<H, SortError> {
        let len = array.length()?;
        debug!(len, backend = %S::name(), "sorting host array");

        {
            let mut elements = array.elements_mut()?;
            let view: &mut [i32] = &mut elements;
            debug_assert_eq!(view.len(), len);

            S::sort(view);
        }

        Ok(array)
    }
}

impl<S: Sort> Default for ArraySorter<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`ArraySorter::sort`] with the crate's [`DefaultSort`] backend.
pub fn sort_array<H: IntArrayHandle>(array: H) -> Result<H, SortError> {
    ArraySorter::<DefaultSort>::new().sort(array)
}
