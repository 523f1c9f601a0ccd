//! Selection sort engine.

use crate::engine::SortEngine;
use sortrace_core::{Op, SortResult, TraceRecorder};

/// Selection sort
///
/// Each compare is emitted against the current minimum candidate, so
/// the highlighted pair tracks the candidate as it moves through the
/// scan. A position already holding its minimum produces no swap and
/// no operation. Not stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortEngine for SelectionSort {
    fn sort(&self, input: &[i64], rec: &mut TraceRecorder) -> SortResult<Vec<i64>> {
        let mut arr = input.to_vec();
        let n = arr.len();
        for i in 0..n {
            let mut min_idx = i;
            for j in (i + 1)..n {
                rec.record(Op::compare(j, min_idx));
                if arr[j] < arr[min_idx] {
                    min_idx = j;
                }
            }
            if min_idx != i {
                arr.swap(i, min_idx);
                rec.record(Op::swap(i, min_idx));
            }
        }
        Ok(arr)
    }
}
