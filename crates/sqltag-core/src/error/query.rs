use super::{Error, ErrorKind};

/// Error raised while running a named query.
///
/// Carries a message that is safe to show to end users next to the query
/// identifier. The private cause is the next error in the chain.
#[derive(Debug)]
pub(super) struct QueryError {
    pub(super) message: Box<str>,
    pub(super) query: Box<str>,
}

impl std::error::Error for QueryError {}

impl core::fmt::Display for QueryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(&self.query)
    }
}

impl Error {
    /// Wraps `cause` as the failure of the query identified by `query`.
    pub fn query(message: impl Into<String>, query: impl Into<String>, cause: Error) -> Error {
        cause.context(Error::from(ErrorKind::Query(QueryError {
            message: message.into().into(),
            query: query.into().into(),
        })))
    }

    /// Returns `true` if this error, or any error it wraps, is a query error.
    pub fn is_query(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::Query(_)))
    }

    /// The public message of the outermost query error in the chain.
    pub fn query_message(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            ErrorKind::Query(err) => Some(&*err.message),
            _ => None,
        })
    }
}
