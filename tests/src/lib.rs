mod exec_log;
pub use exec_log::{ExecLog, ExecOp};

mod recording;
pub use recording::RecordingExecutor;

use sqltag::Db;

/// A [`Db`] over `executor`, plus the handle to its statement log.
pub fn setup(executor: RecordingExecutor) -> (Db<RecordingExecutor>, ExecLog) {
    let log = executor.log();
    (Db::new(executor), log)
}
