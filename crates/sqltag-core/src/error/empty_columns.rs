use super::Error;

/// Error when a statement would be built without any column.
#[derive(Debug)]
pub(super) struct EmptyColumnsError {
    pub(super) operation: Box<str>,
}

impl std::error::Error for EmptyColumnsError {}

impl core::fmt::Display for EmptyColumnsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no columns to {}", self.operation)
    }
}

impl Error {
    /// Creates an error reporting that the walk produced no usable column
    /// for `operation`.
    pub fn empty_columns(operation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::EmptyColumns(EmptyColumnsError {
            operation: operation.into().into(),
        }))
    }

    /// Returns `true` if this error is an empty column set error.
    pub fn is_empty_columns(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::EmptyColumns(_)))
    }
}
