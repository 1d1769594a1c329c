//! Instrumented algorithm executors.
//!
//! Each executor runs its algorithm to completion (or early exit) while
//! recording a step at every checkpoint through a
//! [`TraceRecorder`](algoviz_core::TraceRecorder). Executors are pure,
//! deterministic functions of their input: the same input always produces the
//! same trace.
//!
//! - [`linear_search`]: `start`, `compare` per index, then `found` or `not_found`
//! - [`bubble_sort`]: `start`, `compare`/`swap` per inner iteration, `sorted`
//! - [`n_queens`]: recursive backtracking with `try`/`check`/`place`/`remove`,
//!   first solution only
//!
//! A [`TraceBudget`](algoviz_core::TraceBudget) bounds the work. When it runs
//! out the executor returns [`ExecError::Trace`] and the partial trace is
//! discarded.

pub mod bubble_sort;
pub mod error;
pub mod linear_search;
pub mod n_queens;

pub use bubble_sort::{bubble_sort, SortTrace};
pub use error::ExecError;
pub use linear_search::{linear_search, SearchTrace};
pub use n_queens::{n_queens, Board, QueensOutcome, QueensTrace, UNPLACED};
