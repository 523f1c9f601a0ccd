//! Divergence detection between a replayed state and a reported
//! outcome.

use crate::cursor::TraceCursor;
use crate::engine::{ReplayError, Replayer};
use serde::{Deserialize, Serialize};
use sortrace_core::SortOutcome;

/// First position where two arrays disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divergence {
    /// Diverging position
    pub index: usize,
    /// Expected value
    pub expected: i64,
    /// Actual value
    pub actual: i64,
}

/// Find the first position where `actual` differs from `expected`
///
/// Positions beyond the shorter array are not examined; check lengths
/// separately.
#[must_use]
pub fn first_divergence(expected: &[i64], actual: &[i64]) -> Option<Divergence> {
    expected
        .iter()
        .zip(actual)
        .enumerate()
        .find_map(|(index, (&expected, &actual))| {
            (expected != actual).then_some(Divergence {
                index,
                expected,
                actual,
            })
        })
}

/// Verify that replaying an outcome's trace reproduces its reported
/// sorted output
///
/// # Errors
///
/// Returns error if the trace does not apply cleanly or the replayed
/// array differs from the reported one
pub fn verify_outcome(outcome: &SortOutcome) -> Result<(), ReplayError> {
    let mut cursor = TraceCursor::from_trace(&outcome.trace);
    let state = Replayer::new().replay(&mut cursor, &outcome.input)?;

    if state.values().len() != outcome.sorted.len() {
        return Err(ReplayError::LengthMismatch {
            expected: outcome.sorted.len(),
            actual: state.values().len(),
        });
    }
    if let Some(divergence) = first_divergence(&outcome.sorted, state.values()) {
        return Err(ReplayError::Diverged {
            index: divergence.index,
            expected: divergence.expected,
            actual: divergence.actual,
        });
    }
    Ok(())
}
