use super::Error;

/// Error decoding a JSON projection or a scanned row.
#[derive(Debug)]
pub(super) struct JsonError {
    pub(super) inner: serde_json::Error,
}

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for JsonError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "failed to decode json: {}", self.inner)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::Json(JsonError { inner: err }))
    }
}

impl Error {
    /// Returns `true` if this error is a JSON decoding error.
    pub fn is_json(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::Json(_)))
    }
}
