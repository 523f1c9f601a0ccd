//! Merge sort engine.
//!
//! Recursion runs over explicit index ranges of one working copy, so
//! every overwrite in the trace targets the position the element holds
//! in the full array. Merging drains snapshot copies of the two sorted
//! halves back into the shared range.

use crate::engine::SortEngine;
use sortrace_core::{Op, SortResult, TraceRecorder};

/// Stable recursive merge sort
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortEngine for MergeSort {
    fn sort(&self, input: &[i64], rec: &mut TraceRecorder) -> SortResult<Vec<i64>> {
        let mut arr = input.to_vec();
        sort_range(&mut arr, 0, input.len(), rec);
        Ok(arr)
    }
}

fn sort_range(arr: &mut [i64], lo: usize, hi: usize, rec: &mut TraceRecorder) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(arr, lo, mid, rec);
    sort_range(arr, mid, hi, rec);
    merge(arr, lo, mid, hi, rec);
}

/// Merge the sorted ranges `[lo, mid)` and `[mid, hi)`.
///
/// Ties favor the left half, which keeps the sort stable. Compare
/// indices are the positions the candidates held when the merge
/// started; once the range is partially rewritten they name logical
/// comparison targets rather than current values.
fn merge(arr: &mut [i64], lo: usize, mid: usize, hi: usize, rec: &mut TraceRecorder) {
    let left = arr[lo..mid].to_vec();
    let right = arr[mid..hi].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut out = lo;
    while i < left.len() && j < right.len() {
        rec.record(Op::compare(lo + i, mid + j));
        if left[i] <= right[j] {
            arr[out] = left[i];
            rec.record(Op::overwrite(out, left[i]));
            i += 1;
        } else {
            arr[out] = right[j];
            rec.record(Op::overwrite(out, right[j]));
            j += 1;
        }
        out += 1;
    }
    // One side is exhausted; drain the other without further compares.
    while i < left.len() {
        arr[out] = left[i];
        rec.record(Op::overwrite(out, left[i]));
        i += 1;
        out += 1;
    }
    while j < right.len() {
        arr[out] = right[j];
        rec.record(Op::overwrite(out, right[j]));
        j += 1;
        out += 1;
    }
}
