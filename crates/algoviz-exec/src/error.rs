//! Executor error types.

use algoviz_core::TraceError;

/// Errors produced by an executor run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    /// The input cannot be executed (e.g. a zero-sized board).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The trace budget ran out before the algorithm finished.
    #[error(transparent)]
    Trace(#[from] TraceError),
}
