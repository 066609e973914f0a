//! Scoped access to caller-owned integer arrays.
//!
//! A host array is never owned by the sort. [`IntArrayHandle::elements_mut`] hands out a guard
//! that derefs to `[i32]`; dropping the guard commits any changes back to the owner and
//! releases the borrow. Since that happens in `Drop`, it runs on every exit path, unwinding
//! included.

use std::ops::{Deref, DerefMut};

use crate::error::SortError;

pub trait IntArrayHandle {
    /// Mutable view over the array contents. Dropping it commits and releases.
    type Elements<'a>: DerefMut<Target = [i32]>
    where
        Self: 'a;

    /// Length of the array, or `InvalidArgument` for a null or unreadable handle.
    fn length(&mut self) -> Result<usize, SortError>;

    fn elements_mut(&mut self) -> Result<Self::Elements<'_>, SortError>;
}

impl IntArrayHandle for [i32] {
    type Elements<'a> = &'a mut [i32];

    fn length(&mut self) -> Result<usize, SortError> {
        Ok(self.len())
    }

    fn elements_mut(&mut self) -> Result<&mut [i32], SortError> {
        Ok(self)
    }
}

impl<H: IntArrayHandle + ?Sized> IntArrayHandle for &mut H {
    type Elements<'a> = H::Elements<'a>
    where
        Self: 'a;

    fn length(&mut self) -> Result<usize, SortError> {
        H::length(&mut **self)
    }

    fn elements_mut(&mut self) -> Result<Self::Elements<'_>, SortError> {
        H::elements_mut(&mut **self)
    }
}

/// In-process stand-in for a JVM `int[]`.
///
/// Behaves like `GetIntArrayElements` returning a copy: the guard works on its own buffer and
/// only writes it back into the array when dropped. A handle can also be null. Acquisitions
/// and releases are counted so callers can check that every borrow was given back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HostIntArray {
    storage: Option<Box<[i32]>>,
    acquire_count: usize,
    release_count: usize,
}

impl HostIntArray {
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            storage: Some(values.into_boxed_slice()),
            acquire_count: 0,
            release_count: 0,
        }
    }

    pub fn null() -> Self {
        Self::default()
    }

    pub fn is_null(&self) -> bool {
        self.storage.is_none()
    }

    pub fn as_slice(&self) -> Option<&[i32]> {
        self.storage.as_deref()
    }

    pub fn into_vec(self) -> Option<Vec<i32>> {
        self.storage.map(<[i32]>::into_vec)
    }

    pub fn acquire_count(&self) -> usize {
        self.acquire_count
    }

    pub fn release_count(&self) -> usize {
        self.release_count
    }
}

impl From<Vec<i32>> for HostIntArray {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl IntArrayHandle for HostIntArray {
    type Elements<'a> = CopyBackElements<'a>;

    fn length(&mut self) -> Result<usize, SortError> {
        self.storage
            .as_ref()
            .map(|storage| storage.len())
            .ok_or_else(|| SortError::invalid_argument("null array handle"))
    }

    fn elements_mut(&mut self) -> Result<CopyBackElements<'_>, SortError> {
        let Self {
            storage,
            acquire_count,
            release_count,
        } = self;

        let target = storage
            .as_deref_mut()
            .ok_or_else(|| SortError::invalid_argument("null array handle"))?;
        *acquire_count += 1;

        Ok(CopyBackElements {
            buffer: target.to_vec(),
            target,
            release_count,
        })
    }
}

/// Borrow of a [`HostIntArray`] backed by an intermediate copy.
#[derive(Debug)]
pub struct CopyBackElements<'a> {
    buffer: Vec<i32>,
    target: &'a mut [i32],
    release_count: &'a mut usize,
}

impl Deref for CopyBackElements<'_> {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        &self.buffer
    }
}

impl DerefMut for CopyBackElements<'_> {
    fn deref_mut(&mut self) -> &mut [i32] {
        &mut self.buffer
    }
}

impl Drop for CopyBackElements<'_> {
    fn drop(&mut self) {
        self.target.copy_from_slice(&self.buffer);
        *self.release_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_is_committed_on_release() {
        let mut host = HostIntArray::new(vec![3, 1, 2]);

        {
            let mut elements = host.elements_mut().unwrap();
            elements[0] = 9;
        }

        assert_eq!(host.as_slice(), Some(&[9, 1, 2][..]));
        assert_eq!(host.acquire_count(), 1);
        assert_eq!(host.release_count(), 1);
    }

    #[test]
    fn release_runs_during_unwind() {
        let mut host = HostIntArray::new(vec![1, 2]);

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut elements = host.elements_mut().unwrap();
            elements[1] = 7;
            panic!("sort blew up");
        }));

        assert!(result.is_err());
        assert_eq!(host.release_count(), 1);
        assert_eq!(host.as_slice(), Some(&[1, 7][..]));
    }

    #[test]
    fn null_handle_is_rejected() {
        let mut host = HostIntArray::null();

        assert!(host.is_null());
        assert!(matches!(host.length(), Err(SortError::InvalidArgument { .. })));
        assert!(host.elements_mut().is_err());
        assert_eq!(host.acquire_count(), 0);
        assert_eq!(host.release_count(), 0);
    }

    #[test]
    fn slice_handle_borrows_in_place() {
        let mut values = [4, 5, 6];
        let handle = &mut values[..];

        assert_eq!(handle.length(), Ok(3));
        handle.elements_mut().unwrap()[2] = 0;

        assert_eq!(values, [4, 5, 0]);
    }
}
