//! Insertion sort engine.

use crate::engine::SortEngine;
use sortrace_core::{Op, SortResult, TraceRecorder};

/// Stable in-place insertion sort
///
/// Each outer iteration lifts `arr[i]` out as the key, shifts greater
/// elements one slot right, then writes the key into the gap. The
/// final placement is always recorded, even when the key did not move:
/// the resulting self-overwrite is part of the trace shape consumers
/// rely on.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortEngine for InsertionSort {
    fn sort(&self, input: &[i64], rec: &mut TraceRecorder) -> SortResult<Vec<i64>> {
        let mut arr = input.to_vec();
        for i in 1..arr.len() {
            let key = arr[i];
            // j is the open slot; the element under test sits at j - 1.
            let mut j = i;
            while j > 0 && arr[j - 1] > key {
                rec.record(Op::compare(j - 1, j));
                arr[j] = arr[j - 1];
                rec.record(Op::overwrite(j, arr[j]));
                j -= 1;
            }
            arr[j] = key;
            rec.record(Op::overwrite(j, key));
        }
        Ok(arr)
    }
}
