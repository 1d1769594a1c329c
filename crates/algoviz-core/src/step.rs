//! Step records and the immutable [`Trace`] they form.

use indexmap::IndexMap;
use serde::Serialize;

/// Induction variables active at a checkpoint, in insertion order.
pub type Variables = IndexMap<&'static str, i64>;

/// A single observed event in an algorithm's execution.
///
/// Wire shape: `{step, line, action, variables, data, message}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord<A, D> {
    /// 0-based position in the trace.
    pub step: u64,
    /// Pseudocode line the client highlights for this event.
    pub line: u32,
    pub action: A,
    pub variables: Variables,
    /// Snapshot of the working state, owned by this record.
    pub data: D,
    pub message: String,
}

impl<A, D> StepRecord<A, D> {
    /// Value of a named variable, if present.
    pub fn var(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }
}

/// An ordered, finished sequence of step records.
///
/// Produced by [`TraceRecorder::finish`](crate::recorder::TraceRecorder::finish).
/// There are no mutating accessors; serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace<A, D> {
    steps: Vec<StepRecord<A, D>>,
}

impl<A, D> Trace<A, D> {
    pub(crate) fn from_steps(steps: Vec<StepRecord<A, D>>) -> Self {
        Trace { steps }
    }

    pub fn steps(&self) -> &[StepRecord<A, D>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&StepRecord<A, D>> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord<A, D>> {
        self.steps.iter()
    }

    /// Consumes the trace, yielding its records.
    pub fn into_steps(self) -> Vec<StepRecord<A, D>> {
        self.steps
    }
}

impl<'a, A, D> IntoIterator for &'a Trace<A, D> {
    type Item = &'a StepRecord<A, D>;
    type IntoIter = std::slice::Iter<'a, StepRecord<A, D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
