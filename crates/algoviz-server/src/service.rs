//! Request validation and executor dispatch.
//!
//! Handlers stay thin: they extract the body and hand it to one of these
//! functions on a blocking task. Each function checks required fields and
//! configured ceilings, runs the executor under the configured budget, and
//! wraps the finished trace in its response type.

use algoviz_exec::{bubble_sort, linear_search, n_queens};

use crate::config::TraceLimits;
use crate::error::ApiError;
use crate::schema::traces::{
    BubbleSortRequest, BubbleSortResponse, LinearSearchRequest, LinearSearchResponse,
    NQueensRequest, NQueensResponse, TraceResponse,
};

fn required<T>(field: Option<T>, name: &str) -> Result<T, ApiError> {
    field.ok_or_else(|| ApiError::BadRequest(format!("missing required field `{}`", name)))
}

fn check_array_len(len: usize, limits: &TraceLimits) -> Result<(), ApiError> {
    if len > limits.max_array_len {
        tracing::warn!(len, max = limits.max_array_len, "array input rejected");
        return Err(ApiError::BadRequest(format!(
            "array has {} elements; at most {} are allowed",
            len, limits.max_array_len
        )));
    }
    Ok(())
}

/// Runs linear search over `array` for `target`.
pub fn run_linear_search(
    request: LinearSearchRequest,
    limits: &TraceLimits,
) -> Result<LinearSearchResponse, ApiError> {
    let array = required(request.array, "array")?;
    let target = required(request.target, "target")?;
    check_array_len(array.len(), limits)?;

    let steps = linear_search(&array, &target, limits.budget)?;
    tracing::debug!(
        algorithm = "linear-search",
        len = array.len(),
        steps = steps.len(),
        "trace generated"
    );
    Ok(TraceResponse { steps })
}

/// Runs bubble sort over `array`.
pub fn run_bubble_sort(
    request: BubbleSortRequest,
    limits: &TraceLimits,
) -> Result<BubbleSortResponse, ApiError> {
    let array = required(request.array, "array")?;
    check_array_len(array.len(), limits)?;

    let steps = bubble_sort(&array, limits.budget)?;
    tracing::debug!(
        algorithm = "bubble-sort",
        len = array.len(),
        steps = steps.len(),
        "trace generated"
    );
    Ok(TraceResponse { steps })
}

/// Runs the N-Queens search for an `n`×`n` board.
pub fn run_n_queens(
    request: NQueensRequest,
    limits: &TraceLimits,
) -> Result<NQueensResponse, ApiError> {
    let n = required(request.n, "n")? as usize;
    if n == 0 || n > limits.max_queens {
        tracing::warn!(n, max = limits.max_queens, "board size rejected");
        return Err(ApiError::BadRequest(format!(
            "n must be between 1 and {}",
            limits.max_queens
        )));
    }

    let outcome = n_queens(n, limits.budget)?;
    tracing::debug!(
        algorithm = "n-queens",
        n,
        steps = outcome.trace.len(),
        solution_found = outcome.solution_found,
        "trace generated"
    );
    Ok(NQueensResponse {
        steps: outcome.trace,
        solution_found: outcome.solution_found,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::{Scalar, TraceBudget};

    fn ints(values: &[i64]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::Int).collect()
    }

    #[test]
    fn missing_target_names_the_field() {
        let request = LinearSearchRequest {
            array: Some(ints(&[1, 2])),
            target: None,
        };
        let err = run_linear_search(request, &TraceLimits::default()).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(msg) if msg.contains("target")));
    }

    #[test]
    fn oversized_array_is_rejected_before_running() {
        let limits = TraceLimits {
            max_array_len: 2,
            ..TraceLimits::default()
        };
        let request = BubbleSortRequest {
            array: Some(ints(&[3, 2, 1])),
        };
        assert!(matches!(
            run_bubble_sort(request, &limits),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn board_size_bounds() {
        let limits = TraceLimits {
            max_queens: 6,
            ..TraceLimits::default()
        };
        for n in [0, 7] {
            let err = run_n_queens(NQueensRequest { n: Some(n) }, &limits).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "n = {}", n);
        }
        let ok = run_n_queens(NQueensRequest { n: Some(6) }, &limits).unwrap();
        assert!(ok.solution_found);
    }

    #[test]
    fn exhausted_budget_is_a_trace_limit_error() {
        let limits = TraceLimits {
            budget: TraceBudget {
                max_steps: Some(5),
                deadline: None,
            },
            ..TraceLimits::default()
        };
        let err = run_n_queens(NQueensRequest { n: Some(8) }, &limits).unwrap_err();
        assert!(matches!(err, ApiError::TraceLimitExceeded(_)));
    }
}
