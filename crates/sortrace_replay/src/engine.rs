//! Replay engine for deterministic reconstruction.

use crate::cursor::TraceCursor;
use crate::state::ArrayState;
use serde::{Deserialize, Serialize};
use sortrace_core::{Op, SortError};
use tracing::debug;

/// Replay engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Maximum operations to apply (0 = unlimited)
    pub max_steps: usize,
}

/// Replay engine error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// Operation names a position outside the array
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Array length
        len: usize,
        /// Trace step where it happened
        step: usize,
    },
    /// Replayed array differs from the reported output
    Diverged {
        /// First diverging position
        index: usize,
        /// Value the engine reported
        expected: i64,
        /// Value the replay produced
        actual: i64,
    },
    /// Replayed array length differs from the reported output
    LengthMismatch {
        /// Reported length
        expected: usize,
        /// Replayed length
        actual: usize,
    },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len, step } => {
                write!(
                    f,
                    "Index {} out of range for length {} at step {}",
                    index, len, step
                )
            }
            Self::Diverged {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Replay diverged at index {}: expected {}, got {}",
                    index, expected, actual
                )
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Length mismatch: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<ReplayError> for SortError {
    fn from(err: ReplayError) -> Self {
        SortError::Validation {
            field: "replay".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Replay engine for reconstructing array states from traces
///
/// An empty trace is a valid replay: single-element inputs legally
/// produce one, and the result is the initial state unchanged.
#[derive(Debug, Clone, Default)]
pub struct Replayer {
    config: ReplayConfig,
}

impl Replayer {
    /// Create a replay engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ReplayConfig::default(),
        }
    }

    /// Create with custom config
    #[must_use]
    pub fn with_config(mut self, config: ReplayConfig) -> Self {
        self.config = config;
        self
    }

    /// Replay a cursor against a copy of the original input
    ///
    /// # Errors
    ///
    /// Returns error if an operation does not apply to the array
    pub fn replay(
        &self,
        cursor: &mut TraceCursor,
        initial: &[i64],
    ) -> Result<ArrayState, ReplayError> {
        self.replay_with_callback(cursor, initial, |_, _| {})
    }

    /// Replay with a per-operation callback
    ///
    /// The callback runs after each operation is applied, receiving
    /// the operation and the state it produced. This is the hook a
    /// presentation layer renders frames from.
    ///
    /// # Errors
    ///
    /// Returns error if an operation does not apply to the array
    pub fn replay_with_callback<F>(
        &self,
        cursor: &mut TraceCursor,
        initial: &[i64],
        mut callback: F,
    ) -> Result<ArrayState, ReplayError>
    where
        F: FnMut(Op, &ArrayState),
    {
        let mut state = ArrayState::new(initial.to_vec());
        let mut steps = 0usize;

        while let Some(op) = cursor.next_op() {
            state.apply(op)?;
            callback(op, &state);
            steps += 1;
            if self.config.max_steps > 0 && steps >= self.config.max_steps {
                break;
            }
        }

        debug!(steps, len = initial.len(), "replay finished");
        Ok(state)
    }
}
