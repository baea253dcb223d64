//! Polling spawned tokio tasks from the egui frame loop.

use futures::FutureExt;
use tokio::task::{JoinError, JoinHandle};

/// Result of polling a task
#[derive(Debug)]
pub enum PollResult<T> {
    /// No task to poll
    NoTask,
    /// Task is still running
    Pending,
    /// Task finished; `Err` means it panicked or was aborted
    Complete(Result<T, JoinError>),
}

/// Poll an optional task handle without blocking.
///
/// A finished handle is taken out of `task`, so each result is delivered once.
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    match task {
        None => return PollResult::NoTask,
        Some(handle) if !handle.is_finished() => return PollResult::Pending,
        Some(_) => {}
    }

    let Some(handle) = task.take() else {
        return PollResult::NoTask;
    };

    match handle.now_or_never() {
        Some(result) => PollResult::Complete(result),
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}
