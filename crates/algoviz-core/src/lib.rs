//! Core data model for algoviz step traces.
//!
//! A trace is the ordered list of [`StepRecord`]s an algorithm emits while it
//! runs. Records are appended through a [`TraceRecorder`], which numbers them,
//! derives their pseudocode line and message from the action, and snapshots
//! the working state by value.
//!
//! # Modules
//!
//! - [`action`]: per-algorithm action enums and their line/message tables
//! - [`error`]: TraceError for budget exhaustion
//! - [`recorder`]: TraceRecorder and TraceBudget
//! - [`scalar`]: Scalar, the numeric element type of searched/sorted arrays
//! - [`step`]: StepRecord, Trace, Variables

pub mod action;
pub mod error;
pub mod recorder;
pub mod scalar;
pub mod step;

// Re-export commonly used types
pub use action::{Action, QueensAction, SearchAction, SortAction};
pub use error::TraceError;
pub use recorder::{TraceBudget, TraceRecorder};
pub use scalar::Scalar;
pub use step::{StepRecord, Trace, Variables};
