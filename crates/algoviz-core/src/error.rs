//! Core error types for algoviz-core.
//!
//! Recording a step never fails on its own. Errors only arise when a
//! [`TraceBudget`](crate::recorder::TraceBudget) is attached and exhausted.

use thiserror::Error;

/// Errors produced while recording a trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The trace grew past the configured number of steps.
    #[error("trace exceeded the step limit of {limit}")]
    StepLimitExceeded { limit: usize },

    /// The configured wall-clock deadline passed while recording.
    #[error("trace exceeded its deadline after {elapsed_ms} ms")]
    DeadlineExceeded { elapsed_ms: u128 },
}
