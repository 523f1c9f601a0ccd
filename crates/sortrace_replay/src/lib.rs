//! SORTRACE Replay Engine
//!
//! Deterministic reconstruction of every intermediate array state from
//! a trace alone, without re-running the algorithm.
//!
//! # Replay contract
//!
//! A replay walks the trace in order against a copy of the original
//! input. `Overwrite` and `Swap` mutate the array; `Compare` mutates
//! nothing and exists only so a presentation layer can light up the
//! compared positions. Applying the full trace yields exactly the
//! sorted sequence the engine reported.
//!
//! Two asymmetries drivers must tolerate:
//!
//! - Counting sort traces contain no `Compare` at all. A driver that
//!   expects a compare immediately before every highlight must
//!   special-case write-only traces.
//! - `Compare` indices name logical comparison targets. They are
//!   always valid positions, but the values those positions held at
//!   emission time may already have moved on (merge sort compares
//!   against its half snapshots). Highlight the positions; do not
//!   assert on their values.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod diff;
pub mod engine;
pub mod state;

pub use cursor::TraceCursor;
pub use diff::{Divergence, first_divergence, verify_outcome};
pub use engine::{ReplayConfig, ReplayError, Replayer};
pub use state::{ArrayState, Highlight};
