use super::Error;

/// Error when no walked field names the table an operation targets.
#[derive(Debug)]
pub(super) struct MissingTableError {
    pub(super) operation: Box<str>,
}

impl std::error::Error for MissingTableError {}

impl core::fmt::Display for MissingTableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} table not found", self.operation)
    }
}

impl Error {
    /// Creates an error reporting that neither `select_table` nor `table`
    /// was found for `operation`.
    pub fn missing_table(operation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingTable(MissingTableError {
            operation: operation.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing table error.
    pub fn is_missing_table(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::MissingTable(_)))
    }
}
