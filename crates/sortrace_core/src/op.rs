//! Primitive trace operations.
//!
//! Every step a sort engine takes is mirrored into the trace as one of
//! these variants. `Compare` is display-only; `Overwrite` and `Swap`
//! are the mutations a replay applies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// Indices under comparison at time of emission. No mutation; the
    /// indices are positions to light up, not value assertions.
    Compare {
        /// First compared position
        a: usize,
        /// Second compared position
        b: usize,
    },
    /// Assign `value` to position `index`
    Overwrite {
        /// Target position
        index: usize,
        /// Value written
        value: i64,
    },
    /// Exchange the values at positions `a` and `b`
    Swap {
        /// First swapped position
        a: usize,
        /// Second swapped position
        b: usize,
    },
}

/// Kind of operation, without its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// Comparison of two positions
    Compare,
    /// Single-position write
    Overwrite,
    /// Two-position exchange
    Swap,
}

impl Op {
    /// Build a compare operation
    #[must_use]
    pub const fn compare(a: usize, b: usize) -> Self {
        Self::Compare { a, b }
    }

    /// Build an overwrite operation
    #[must_use]
    pub const fn overwrite(index: usize, value: i64) -> Self {
        Self::Overwrite { index, value }
    }

    /// Build a swap operation
    #[must_use]
    pub const fn swap(a: usize, b: usize) -> Self {
        Self::Swap { a, b }
    }

    /// Kind of this operation
    #[must_use]
    pub const fn kind(self) -> OpKind {
        match self {
            Self::Compare { .. } => OpKind::Compare,
            Self::Overwrite { .. } => OpKind::Overwrite,
            Self::Swap { .. } => OpKind::Swap,
        }
    }

    /// Whether a replay mutates the array for this operation
    #[must_use]
    pub const fn is_mutation(self) -> bool {
        matches!(self, Self::Overwrite { .. } | Self::Swap { .. })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { a, b } => write!(f, "compare {} {}", a, b),
            Self::Overwrite { index, value } => write!(f, "overwrite {} <- {}", index, value),
            Self::Swap { a, b } => write!(f, "swap {} {}", a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_constructors() {
        assert_eq!(Op::compare(0, 1), Op::Compare { a: 0, b: 1 });
        assert_eq!(Op::overwrite(2, 9), Op::Overwrite { index: 2, value: 9 });
        assert_eq!(Op::swap(1, 3), Op::Swap { a: 1, b: 3 });
    }

    #[test]
    fn test_op_kind() {
        assert_eq!(Op::compare(0, 1).kind(), OpKind::Compare);
        assert_eq!(Op::overwrite(0, 1).kind(), OpKind::Overwrite);
        assert_eq!(Op::swap(0, 1).kind(), OpKind::Swap);
    }

    #[test]
    fn test_op_is_mutation() {
        assert!(!Op::compare(0, 1).is_mutation());
        assert!(Op::overwrite(0, 1).is_mutation());
        assert!(Op::swap(0, 1).is_mutation());
    }

    #[test]
    fn test_op_display() {
        assert_eq!(Op::compare(0, 1).to_string(), "compare 0 1");
        assert_eq!(Op::overwrite(2, -5).to_string(), "overwrite 2 <- -5");
        assert_eq!(Op::swap(1, 3).to_string(), "swap 1 3");
    }

    #[test]
    fn test_op_serialization() {
        let op = Op::overwrite(3, 42);
        let serialized = serde_json::to_vec(&op).unwrap();
        let deserialized: Op = serde_json::from_slice(&serialized).unwrap();
        assert_eq!(op, deserialized);
    }
}
