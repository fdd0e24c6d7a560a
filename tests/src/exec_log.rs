use sqltag::Value;

use std::sync::{Arc, Mutex};

/// A statement received by the [`RecordingExecutor`](crate::RecordingExecutor).
#[derive(Debug, Clone, PartialEq)]
pub struct ExecOp {
    pub sql: String,
    pub args: Vec<Value>,
}

/// A wrapper around the statement log that provides a clean API for tests
#[derive(Debug, Clone, Default)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<ExecOp>>>,
}

impl ExecLog {
    pub(crate) fn push(&self, op: ExecOp) {
        self.ops.lock().unwrap().push(op);
    }

    /// Get the number of logged statements
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }

    /// Remove and return the first statement from the log
    /// Returns None if the log is empty
    pub fn pop(&self) -> Option<ExecOp> {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            None
        } else {
            Some(ops.remove(0))
        }
    }
}
