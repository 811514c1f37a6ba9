//! Error types for taskflow.
//!
//! The parser itself never fails; these errors come from the board,
//! configuration loading, input files and JSON output.

use thiserror::Error;

/// Errors produced by taskflow operations.
#[derive(Debug, Error)]
pub enum TaskflowError {
    /// Configuration could not be read, parsed or written.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure (reading an input file or stdin).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A task id did not match any task on the board.
    #[error("not found: {0}")]
    NotFound(String),

    /// A user-supplied value was rejected.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TaskflowError {
    /// Shorthand for a missing task id.
    #[must_use]
    pub fn task_not_found(id: u64) -> Self {
        Self::NotFound(format!("task {id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = TaskflowError::task_not_found(7);
        assert_eq!(err.to_string(), "not found: task 7");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let err: TaskflowError = io.into();
        assert!(matches!(err, TaskflowError::Io(_)));
        assert!(err.to_string().contains("missing.txt"));
    }
}
