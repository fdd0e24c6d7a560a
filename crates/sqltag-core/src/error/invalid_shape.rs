use super::Error;

/// Error when a value does not have the shape an operation requires.
///
/// This occurs when:
/// - The walked value is neither a struct nor a collection of structs
/// - A single-row operation receives a collection
/// - A collection that must hold at least one row is empty
#[derive(Debug)]
pub(super) struct InvalidShapeError {
    pub(super) message: Box<str>,
}

impl std::error::Error for InvalidShapeError {}

impl core::fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid shape: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid shape error.
    pub fn invalid_shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidShape(InvalidShapeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid shape error.
    pub fn is_invalid_shape(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidShape(_)))
    }
}
