//! Append-only step recorder.
//!
//! A [`TraceRecorder`] is owned by one executor invocation and handed by
//! `&mut` to whichever helper reaches a checkpoint. Each [`record`] call
//! appends exactly one [`StepRecord`]: the step id is the current length, the
//! line and message come from the [`Action`], and the data is a clone of the
//! borrowed working state.
//!
//! An optional [`TraceBudget`] caps the step count and wall-clock time. The
//! budget is the only way `record` can fail.
//!
//! [`record`]: TraceRecorder::record

use std::time::{Duration, Instant};

use crate::action::Action;
use crate::error::TraceError;
use crate::step::{StepRecord, Trace, Variables};

/// Limits applied while recording. `None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceBudget {
    /// Maximum number of steps a trace may contain.
    pub max_steps: Option<usize>,
    /// Maximum wall-clock time from recorder creation to the last step.
    pub deadline: Option<Duration>,
}

impl TraceBudget {
    /// A budget with no limits.
    pub fn unlimited() -> Self {
        TraceBudget::default()
    }
}

/// Builds a [`Trace`] one checkpoint at a time.
#[derive(Debug)]
pub struct TraceRecorder<A, D> {
    steps: Vec<StepRecord<A, D>>,
    budget: TraceBudget,
    started: Instant,
}

impl<A: Action, D: Clone> TraceRecorder<A, D> {
    /// Creates a recorder with no budget.
    pub fn new() -> Self {
        Self::with_budget(TraceBudget::unlimited())
    }

    /// Creates a recorder whose clock starts now.
    pub fn with_budget(budget: TraceBudget) -> Self {
        TraceRecorder {
            steps: Vec::new(),
            budget,
            started: Instant::now(),
        }
    }

    /// Appends one step, snapshotting `working` by value.
    pub fn record(
        &mut self,
        action: A,
        variables: Variables,
        working: &D,
    ) -> Result<(), TraceError> {
        if let Some(limit) = self.budget.max_steps {
            if self.steps.len() >= limit {
                return Err(TraceError::StepLimitExceeded { limit });
            }
        }
        if let Some(deadline) = self.budget.deadline {
            let elapsed = self.started.elapsed();
            if elapsed >= deadline {
                return Err(TraceError::DeadlineExceeded {
                    elapsed_ms: elapsed.as_millis(),
                });
            }
        }

        let message = action.describe(&variables);
        self.steps.push(StepRecord {
            step: self.steps.len() as u64,
            line: action.line(),
            action,
            variables,
            data: working.clone(),
            message,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Seals the recorded steps into an immutable trace.
    pub fn finish(self) -> Trace<A, D> {
        Trace::from_steps(self.steps)
    }
}

impl<A: Action, D: Clone> Default for TraceRecorder<A, D> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{SearchAction, SortAction};
    use crate::scalar::Scalar;

    #[test]
    fn step_ids_start_at_zero_and_follow_call_order() {
        let data = vec![1, 2];
        let mut rec = TraceRecorder::new();
        rec.record(SortAction::Start, Variables::from([("n", 2)]), &data)
            .unwrap();
        rec.record(SortAction::Compare, Variables::from([("i", 0), ("j", 0)]), &data)
            .unwrap();
        rec.record(SortAction::Sorted, Variables::new(), &data).unwrap();

        let trace = rec.finish();
        let ids: Vec<u64> = trace.iter().map(|s| s.step).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(trace.steps()[1].line, 5);
        assert_eq!(trace.steps()[1].message, "Comparing elements at index 0 and 1");
    }

    #[test]
    fn snapshots_do_not_follow_later_mutation() {
        let mut data = vec![3, 1];
        let mut rec = TraceRecorder::new();
        rec.record(SortAction::Start, Variables::new(), &data).unwrap();
        data.swap(0, 1);
        rec.record(SortAction::Swap, Variables::from([("i", 0), ("j", 0)]), &data)
            .unwrap();
        data.push(9);

        let trace = rec.finish();
        assert_eq!(trace.steps()[0].data, vec![3, 1]);
        assert_eq!(trace.steps()[1].data, vec![1, 3]);
    }

    #[test]
    fn step_limit_rejects_the_overflowing_record() {
        let budget = TraceBudget {
            max_steps: Some(2),
            deadline: None,
        };
        let mut rec = TraceRecorder::with_budget(budget);
        rec.record(SearchAction::Start, Variables::new(), &()).unwrap();
        rec.record(SearchAction::Compare, Variables::from([("i", 0)]), &())
            .unwrap();
        let err = rec
            .record(SearchAction::NotFound, Variables::new(), &())
            .unwrap_err();
        assert_eq!(err, TraceError::StepLimitExceeded { limit: 2 });
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn elapsed_deadline_rejects_recording() {
        let budget = TraceBudget {
            max_steps: None,
            deadline: Some(Duration::ZERO),
        };
        let mut rec: TraceRecorder<SearchAction, ()> = TraceRecorder::with_budget(budget);
        let err = rec
            .record(SearchAction::Start, Variables::new(), &())
            .unwrap_err();
        assert!(matches!(err, TraceError::DeadlineExceeded { .. }));
        assert!(rec.is_empty());
    }

    #[test]
    fn wire_shape_of_a_short_search_trace() {
        let data = vec![Scalar::Int(7)];
        let mut rec = TraceRecorder::new();
        rec.record(SearchAction::Start, Variables::new(), &data).unwrap();
        rec.record(SearchAction::Compare, Variables::from([("i", 0)]), &data)
            .unwrap();
        rec.record(SearchAction::Found, Variables::from([("i", 0)]), &data)
            .unwrap();

        insta::assert_json_snapshot!(rec.finish(), @r###"
        [
          {
            "step": 0,
            "line": 1,
            "action": "start",
            "variables": {},
            "data": [
              7
            ],
            "message": "Starting Linear Search"
          },
          {
            "step": 1,
            "line": 3,
            "action": "compare",
            "variables": {
              "i": 0
            },
            "data": [
              7
            ],
            "message": "Comparing element at index 0 with target"
          },
          {
            "step": 2,
            "line": 4,
            "action": "found",
            "variables": {
              "i": 0
            },
            "data": [
              7
            ],
            "message": "Target found at index 0"
          }
        ]
        "###);
    }
}
