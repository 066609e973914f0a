use thiserror::Error;

/// Failure of a sort call. Sorting valid integers never fails, so the only way out is a
/// handle that cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("invalid array argument: {reason}")]
    InvalidArgument { reason: String },
}

impl SortError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        SortError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

#[cfg(feature = "jni")]
impl From<jni::errors::Error> for SortError {
    fn from(err: jni::errors::Error) -> Self {
        SortError::invalid_argument(err.to_string())
    }
}
