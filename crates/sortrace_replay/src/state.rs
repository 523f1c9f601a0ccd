//! Reconstructed array state during replay.

use crate::engine::ReplayError;
use serde::{Deserialize, Serialize};
use sortrace_core::Op;

/// Array state reconstructed by applying trace operations in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayState {
    values: Vec<i64>,
    step: usize,
    compares: usize,
    writes: usize,
    swaps: usize,
    highlight: Option<Highlight>,
}

/// Positions the most recent operation touched
///
/// This is what a presentation layer colors: compared positions one
/// way, mutated positions another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    /// Two positions under comparison
    Compared {
        /// First compared position
        a: usize,
        /// Second compared position
        b: usize,
    },
    /// A position that was just written
    Written {
        /// Written position
        index: usize,
    },
    /// Two positions that just exchanged values
    Swapped {
        /// First swapped position
        a: usize,
        /// Second swapped position
        b: usize,
    },
}

impl Highlight {
    /// Whether this highlight touches `index`
    #[must_use]
    pub const fn covers(self, index: usize) -> bool {
        match self {
            Self::Compared { a, b } | Self::Swapped { a, b } => index == a || index == b,
            Self::Written { index: written } => index == written,
        }
    }

    /// Whether the highlighted operation mutated the array
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        !matches!(self, Self::Compared { .. })
    }
}

impl ArrayState {
    /// Start a replay from a copy of the original input
    #[must_use]
    pub fn new(values: Vec<i64>) -> Self {
        Self {
            values,
            step: 0,
            compares: 0,
            writes: 0,
            swaps: 0,
            highlight: None,
        }
    }

    /// Apply one operation
    ///
    /// `Compare` only updates the highlight; `Overwrite` and `Swap`
    /// mutate the array.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::IndexOutOfRange`] when an operation
    /// names a position outside the array.
    pub fn apply(&mut self, op: Op) -> Result<(), ReplayError> {
        match op {
            Op::Compare { a, b } => {
                self.check(a)?;
                self.check(b)?;
                self.compares += 1;
                self.highlight = Some(Highlight::Compared { a, b });
            }
            Op::Overwrite { index, value } => {
                self.check(index)?;
                self.values[index] = value;
                self.writes += 1;
                self.highlight = Some(Highlight::Written { index });
            }
            Op::Swap { a, b } => {
                self.check(a)?;
                self.check(b)?;
                self.values.swap(a, b);
                self.swaps += 1;
                self.highlight = Some(Highlight::Swapped { a, b });
            }
        }
        self.step += 1;
        Ok(())
    }

    fn check(&self, index: usize) -> Result<(), ReplayError> {
        if index >= self.values.len() {
            return Err(ReplayError::IndexOutOfRange {
                index,
                len: self.values.len(),
                step: self.step,
            });
        }
        Ok(())
    }

    /// Current array contents
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Consume the state, yielding the array
    #[must_use]
    pub fn into_values(self) -> Vec<i64> {
        self.values
    }

    /// Number of operations applied so far
    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Compare operations seen so far
    #[must_use]
    pub fn compares(&self) -> usize {
        self.compares
    }

    /// Overwrite operations applied so far
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Swap operations applied so far
    #[must_use]
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Positions touched by the most recent operation
    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_clean() {
        let state = ArrayState::new(vec![3, 1, 2]);
        assert_eq!(state.values(), &[3, 1, 2]);
        assert_eq!(state.step(), 0);
        assert!(state.highlight().is_none());
    }

    #[test]
    fn test_compare_does_not_mutate() {
        let mut state = ArrayState::new(vec![3, 1]);
        state.apply(Op::compare(0, 1)).unwrap();
        assert_eq!(state.values(), &[3, 1]);
        assert_eq!(state.compares(), 1);
        assert_eq!(state.highlight(), Some(Highlight::Compared { a: 0, b: 1 }));
    }

    #[test]
    fn test_overwrite_mutates() {
        let mut state = ArrayState::new(vec![3, 1]);
        state.apply(Op::overwrite(0, 9)).unwrap();
        assert_eq!(state.values(), &[9, 1]);
        assert_eq!(state.writes(), 1);
    }

    #[test]
    fn test_swap_mutates() {
        let mut state = ArrayState::new(vec![3, 1]);
        state.apply(Op::swap(0, 1)).unwrap();
        assert_eq!(state.values(), &[1, 3]);
        assert_eq!(state.swaps(), 1);
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let mut state = ArrayState::new(vec![3, 1]);
        let err = state.apply(Op::overwrite(5, 0)).unwrap_err();
        assert_eq!(
            err,
            ReplayError::IndexOutOfRange {
                index: 5,
                len: 2,
                step: 0
            }
        );
        // Failed application leaves the array untouched.
        assert_eq!(state.values(), &[3, 1]);
        assert_eq!(state.step(), 0);
    }

    #[test]
    fn test_highlight_covers() {
        let highlight = Highlight::Compared { a: 1, b: 3 };
        assert!(highlight.covers(1));
        assert!(highlight.covers(3));
        assert!(!highlight.covers(2));

        let highlight = Highlight::Written { index: 0 };
        assert!(highlight.covers(0));
        assert!(!highlight.covers(1));
    }

    #[test]
    fn test_highlight_mutation_flag() {
        assert!(!Highlight::Compared { a: 0, b: 1 }.is_mutation());
        assert!(Highlight::Written { index: 0 }.is_mutation());
        assert!(Highlight::Swapped { a: 0, b: 1 }.is_mutation());
    }
}
