//! Engine trait and the validated dispatch boundary.

use crate::{CountingSort, InsertionSort, MergeSort, SelectionSort};
use sortrace_core::{Algorithm, SortError, SortOutcome, SortResult, TraceRecorder};
use tracing::debug;

/// A trace-emitting sort over an integer sequence
///
/// Implementations read `input`, mirror every comparison and mutation
/// into `rec`, and return the sorted copy. They hold no state across
/// calls.
pub trait SortEngine {
    /// Sort a copy of `input`, recording operations into `rec`
    ///
    /// # Errors
    ///
    /// Returns error if the input violates an engine precondition
    fn sort(&self, input: &[i64], rec: &mut TraceRecorder) -> SortResult<Vec<i64>>;
}

/// The engine implementing `algorithm`
#[must_use]
pub fn engine_for(algorithm: Algorithm) -> &'static dyn SortEngine {
    match algorithm {
        Algorithm::Merge => &MergeSort,
        Algorithm::Insertion => &InsertionSort,
        Algorithm::Counting => &CountingSort,
        Algorithm::Selection => &SelectionSort,
    }
}

/// Run one sort to completion and return its outcome.
///
/// Validation happens before the engine executes, so a rejected input
/// never produces a partial trace.
///
/// # Errors
///
/// Returns [`SortError::EmptyInput`] for an empty sequence and
/// [`SortError::NegativeValue`] when counting sort is given a negative
/// value.
pub fn run(algorithm: Algorithm, input: &[i64]) -> SortResult<SortOutcome> {
    if input.is_empty() {
        return Err(SortError::EmptyInput);
    }
    if algorithm == Algorithm::Counting {
        if let Some((index, &value)) = input.iter().enumerate().find(|&(_, &v)| v < 0) {
            return Err(SortError::NegativeValue { index, value });
        }
    }

    debug!(%algorithm, len = input.len(), "running sort engine");
    let mut rec = TraceRecorder::new();
    let sorted = engine_for(algorithm).sort(input, &mut rec)?;
    let trace = rec.finish();
    debug!(ops = trace.len(), "sort engine finished");

    Ok(SortOutcome {
        input: input.to_vec(),
        sorted,
        trace,
    })
}
