//! Algorithm selector - the closed set of supported sorts.

use crate::error::SortError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported sorting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Recursive merge sort, stable
    Merge,
    /// In-place insertion sort, stable
    Insertion,
    /// Counting sort over non-negative values, no comparisons
    Counting,
    /// Selection sort, not stable
    Selection,
}

impl Algorithm {
    /// The closed set of supported algorithms
    pub const ALL: [Self; 4] = [Self::Merge, Self::Insertion, Self::Counting, Self::Selection];

    /// Human label for this algorithm
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Merge => "Merge Sort",
            Self::Insertion => "Insertion Sort",
            Self::Counting => "Counting Sort",
            Self::Selection => "Selection Sort",
        }
    }

    /// Whether the algorithm decides order by pairwise comparison.
    ///
    /// Counting sort does not; its traces carry no compare operations,
    /// so a replay driver keying highlights off compares must tolerate
    /// write-only traces.
    #[must_use]
    pub const fn is_comparison_based(self) -> bool {
        !matches!(self, Self::Counting)
    }

    /// Whether equal values keep their relative order
    #[must_use]
    pub const fn is_stable(self) -> bool {
        !matches!(self, Self::Selection)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        let norm = norm.strip_suffix(" sort").unwrap_or(&norm);
        match norm {
            "merge" => Ok(Self::Merge),
            "insertion" => Ok(Self::Insertion),
            "counting" => Ok(Self::Counting),
            "selection" => Ok(Self::Selection),
            _ => Err(SortError::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}
