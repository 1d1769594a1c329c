//! Bubble sort with a compare step per inner iteration and a swap step per
//! exchange.

use algoviz_core::{SortAction, Trace, TraceBudget, TraceRecorder, Variables};

use crate::error::ExecError;

/// Trace of a bubble sort; every snapshot is the array at that instant.
pub type SortTrace<T> = Trace<SortAction, Vec<T>>;

/// Sorts a copy of `array` ascending, recording every comparison and swap.
///
/// `compare` steps carry the array before the exchange, `swap` steps the
/// array after it. The final `sorted` step carries the sorted array.
pub fn bubble_sort<T>(array: &[T], budget: TraceBudget) -> Result<SortTrace<T>, ExecError>
where
    T: PartialOrd + Clone,
{
    let mut working = array.to_vec();
    let n = working.len();
    let mut rec = TraceRecorder::with_budget(budget);

    rec.record(SortAction::Start, Variables::from([("n", n as i64)]), &working)?;

    for i in 0..n {
        for j in 0..n - i - 1 {
            let vars = Variables::from([("i", i as i64), ("j", j as i64)]);
            rec.record(SortAction::Compare, vars.clone(), &working)?;
            if working[j] > working[j + 1] {
                working.swap(j, j + 1);
                rec.record(SortAction::Swap, vars, &working)?;
            }
        }
    }

    rec.record(SortAction::Sorted, Variables::new(), &working)?;
    Ok(rec.finish())
}
