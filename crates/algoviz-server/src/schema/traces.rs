//! Trace request/response types.
//!
//! Request fields are optional at the serde level so that an absent field is
//! reported by the service as a `BAD_REQUEST` naming the field, rather than as
//! a generic body rejection.

use algoviz_core::{Scalar, SearchAction, SortAction, Trace};
use algoviz_exec::QueensTrace;
use serde::{Deserialize, Serialize};

/// `POST /linear-search` body.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearSearchRequest {
    pub array: Option<Vec<Scalar>>,
    pub target: Option<Scalar>,
}

/// `POST /api/bubble-sort` body.
#[derive(Debug, Clone, Deserialize)]
pub struct BubbleSortRequest {
    pub array: Option<Vec<Scalar>>,
}

/// `POST /n-queens` body.
#[derive(Debug, Clone, Deserialize)]
pub struct NQueensRequest {
    /// Board size; must be at least 1.
    pub n: Option<u32>,
}

/// Trace-only response: `{"steps": [..]}`.
#[derive(Debug, Clone, Serialize)]
pub struct TraceResponse<A, D> {
    pub steps: Trace<A, D>,
}

pub type LinearSearchResponse = TraceResponse<SearchAction, Vec<Scalar>>;

pub type BubbleSortResponse = TraceResponse<SortAction, Vec<Scalar>>;

/// `{"steps": [..], "solutionFound": bool}`.
#[derive(Debug, Clone, Serialize)]
pub struct NQueensResponse {
    pub steps: QueensTrace,
    #[serde(rename = "solutionFound")]
    pub solution_found: bool,
}
