//! Counting sort engine.
//!
//! Distribution sort restricted to non-negative values; the only
//! engine whose traces carry no compare operations.

use crate::engine::SortEngine;
use sortrace_core::{Op, SortError, SortResult, TraceRecorder};

/// Stable counting sort over non-negative values
///
/// The count table is sized by the maximum value, so inputs with a
/// large spread pay for it in memory. Placement walks the input from
/// last index to first, which preserves the relative order of equal
/// keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSort;

impl SortEngine for CountingSort {
    fn sort(&self, input: &[i64], rec: &mut TraceRecorder) -> SortResult<Vec<i64>> {
        if input.is_empty() {
            return Ok(Vec::new());
        }
        // Reject negatives before anything reaches the recorder.
        if let Some((index, &value)) = input.iter().enumerate().find(|&(_, &v)| v < 0) {
            return Err(SortError::NegativeValue { index, value });
        }

        let max_val = input.iter().fold(0i64, |max, &v| max.max(v)) as usize;
        let mut count = vec![0usize; max_val + 1];
        for &v in input {
            count[v as usize] += 1;
        }
        for bucket in 1..count.len() {
            count[bucket] += count[bucket - 1];
        }

        let mut output = vec![0i64; input.len()];
        for &v in input.iter().rev() {
            let bucket = v as usize;
            count[bucket] -= 1;
            output[count[bucket]] = v;
            rec.record(Op::overwrite(count[bucket], v));
        }
        Ok(output)
    }
}
