mod response;
pub use response::{ExecResult, Rows};

use crate::{async_trait, stmt::Value};

use std::fmt::Debug;

/// Runs rendered SQL against a database.
///
/// Statements arrive as SQL text with `?` placeholders and their
/// positional arguments. Connection lifecycle, transactions, retries and
/// cancellation belong to the implementation.
#[async_trait]
pub trait Executor: Debug + Send + Sync {
    /// Runs a statement returning rows.
    async fn query(&self, sql: &str, args: &[Value]) -> crate::Result<Rows>;

    /// Runs a statement returning no rows.
    async fn execute(&self, sql: &str, args: &[Value]) -> crate::Result<ExecResult>;
}

