use crate::{ExecLog, ExecOp};

use sqltag::{async_trait, Error, ExecResult, Executor, Result, Rows, Value};

use std::{collections::VecDeque, sync::Mutex};

/// An executor that records every statement and answers queries with
/// scripted responses, in order. Queries without a scripted response
/// return no rows.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    log: ExecLog,
    responses: Mutex<VecDeque<Result<Rows>>>,
    exec_result: Option<ExecResult>,
}

impl RecordingExecutor {
    pub fn new() -> RecordingExecutor {
        RecordingExecutor::default()
    }

    /// Queues `rows` as the response to the next query.
    pub fn with_rows(self, rows: Rows) -> RecordingExecutor {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    /// Queues `err` as the response to the next query.
    pub fn with_error(self, err: Error) -> RecordingExecutor {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// Result returned by every statement run through `execute`.
    pub fn with_exec_result(mut self, result: ExecResult) -> RecordingExecutor {
        self.exec_result = Some(result);
        self
    }

    pub fn log(&self) -> ExecLog {
        self.log.clone()
    }

    fn record(&self, sql: &str, args: &[Value]) {
        self.log.push(ExecOp {
            sql: sql.to_string(),
            args: args.to_vec(),
        });
    }
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn query(&self, sql: &str, args: &[Value]) -> Result<Rows> {
        self.record(sql, args);

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Rows::default()))
    }

    async fn execute(&self, sql: &str, args: &[Value]) -> Result<ExecResult> {
        self.record(sql, args);

        Ok(self.exec_result.unwrap_or_else(|| ExecResult::new(1)))
    }
}
