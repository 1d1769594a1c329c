//! Linear search with early exit.

use algoviz_core::{SearchAction, Trace, TraceBudget, TraceRecorder, Variables};

use crate::error::ExecError;

/// Trace of a linear search; every snapshot is the searched array.
pub type SearchTrace<T> = Trace<SearchAction, Vec<T>>;

/// Scans `array` left to right for `target`.
///
/// The outcome is the last step's action: `found` (with `i`) or `not_found`.
pub fn linear_search<T>(
    array: &[T],
    target: &T,
    budget: TraceBudget,
) -> Result<SearchTrace<T>, ExecError>
where
    T: PartialEq + Clone,
{
    let working = array.to_vec();
    let mut rec = TraceRecorder::with_budget(budget);

    rec.record(SearchAction::Start, Variables::new(), &working)?;

    for (i, value) in working.iter().enumerate() {
        let vars = Variables::from([("i", i as i64)]);
        rec.record(SearchAction::Compare, vars.clone(), &working)?;
        if value == target {
            rec.record(SearchAction::Found, vars, &working)?;
            return Ok(rec.finish());
        }
    }

    rec.record(SearchAction::NotFound, Variables::new(), &working)?;
    Ok(rec.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Scalar;

    fn actions<T>(trace: &SearchTrace<T>) -> Vec<SearchAction> {
        trace.iter().map(|s| s.action).collect()
    }

    #[test]
    fn stops_at_the_match() {
        let trace = linear_search(&[5, 3, 1, 4, 2], &4, TraceBudget::unlimited()).unwrap();

        assert_eq!(trace.len(), 6);
        assert_eq!(
            actions(&trace),
            vec![
                SearchAction::Start,
                SearchAction::Compare,
                SearchAction::Compare,
                SearchAction::Compare,
                SearchAction::Compare,
                SearchAction::Found,
            ]
        );
        let last = trace.last().unwrap();
        assert_eq!(last.var("i"), Some(3));
        assert_eq!(last.message, "Target found at index 3");
    }

    #[test]
    fn first_of_duplicate_matches_wins() {
        let trace = linear_search(&[2, 9, 9], &9, TraceBudget::unlimited()).unwrap();
        assert_eq!(trace.last().unwrap().var("i"), Some(1));
    }

    #[test]
    fn miss_compares_every_element_then_reports_not_found() {
        let trace = linear_search(&[1, 2, 3], &7, TraceBudget::unlimited()).unwrap();

        let compares = trace
            .iter()
            .filter(|s| s.action == SearchAction::Compare)
            .count();
        assert_eq!(compares, 3);
        let last = trace.last().unwrap();
        assert_eq!(last.action, SearchAction::NotFound);
        assert_eq!(last.line, 5);
        assert!(last.variables.is_empty());
    }

    #[test]
    fn empty_array_is_start_then_not_found() {
        let trace = linear_search::<i64>(&[], &1, TraceBudget::unlimited()).unwrap();
        assert_eq!(
            actions(&trace),
            vec![SearchAction::Start, SearchAction::NotFound]
        );
    }

    #[test]
    fn every_snapshot_is_the_input_array() {
        let input = [4, 8, 15];
        let trace = linear_search(&input, &15, TraceBudget::unlimited()).unwrap();
        assert!(trace.iter().all(|s| s.data == input));
    }

    #[test]
    fn budget_exhaustion_yields_no_trace() {
        let budget = TraceBudget {
            max_steps: Some(3),
            deadline: None,
        };
        let err = linear_search(&[1, 2, 3, 4], &4, budget).unwrap_err();
        assert!(matches!(err, ExecError::Trace(_)));
    }

    #[test]
    fn integer_beyond_float_precision_does_not_match_nearby_float() {
        let array = [Scalar::Int(9_007_199_254_740_993)];
        let target = Scalar::Float(9_007_199_254_740_992.0);
        let trace = linear_search(&array, &target, TraceBudget::unlimited()).unwrap();
        assert_eq!(trace.last().unwrap().action, SearchAction::NotFound);
    }
}
