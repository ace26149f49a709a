//! Offload a single call to a worker thread.

use std::thread;

use thiserror::Error;

/// Errors from an offloaded task.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecError {
    #[error("offloaded task panicked")]
    TaskPanicked,
}

/// Run `task` on a dedicated worker thread and block until it finishes.
///
/// One call is in flight at a time, so this buys isolation rather than
/// concurrency: a panic inside the task is contained and surfaced as
/// [`ExecError::TaskPanicked`] instead of unwinding through the caller.
pub fn run_isolated<T, F>(task: F) -> Result<T, ExecError>
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    thread::scope(|scope| scope.spawn(task).join()).map_err(|_| ExecError::TaskPanicked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_the_task_value() {
        let result = run_isolated(|| 21 * 2);
        assert_eq!(result, Ok(42));
    }

    #[test]
    fn test_task_can_borrow_from_the_caller() {
        let hosts = vec!["10.0.0.1", "10.0.0.2"];
        let joined = run_isolated(|| hosts.join(",")).unwrap();
        assert_eq!(joined, "10.0.0.1,10.0.0.2");
    }

    #[test]
    fn test_panicking_task_is_contained() {
        let result: Result<(), ExecError> = run_isolated(|| panic!("boom"));
        assert_eq!(result, Err(ExecError::TaskPanicked));
    }
}
