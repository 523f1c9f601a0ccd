//! Append-only operation log and the recorder that builds it.
//!
//! A [`TraceRecorder`] is handed to a sort engine, which mirrors every
//! comparison and mutation into it. Once the engine returns, the
//! recorder is finished into an immutable [`Trace`] which a replay
//! consumes exactly once, in insertion order.

use crate::error::SortResult;
use crate::op::{Op, OpKind};
use serde::{Deserialize, Serialize};

/// Immutable, insertion-ordered operation log of one sort run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    ops: Vec<Op>,
}

impl Trace {
    /// Build a trace directly from operations
    #[must_use]
    pub fn from_ops(ops: Vec<Op>) -> Self {
        Self { ops }
    }

    /// Number of operations
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the trace holds no operations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// All operations, in emission order
    #[must_use]
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Operation at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Op> {
        self.ops.get(index)
    }

    /// Count operations of one kind
    #[must_use]
    pub fn count_of(&self, kind: OpKind) -> usize {
        self.ops.iter().filter(|op| op.kind() == kind).count()
    }

    /// Number of compare operations
    #[must_use]
    pub fn compare_count(&self) -> usize {
        self.count_of(OpKind::Compare)
    }

    /// Number of overwrite operations
    #[must_use]
    pub fn overwrite_count(&self) -> usize {
        self.count_of(OpKind::Overwrite)
    }

    /// Number of swap operations
    #[must_use]
    pub fn swap_count(&self) -> usize {
        self.count_of(OpKind::Swap)
    }

    /// Serialize to JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails
    pub fn from_json(json: &str) -> SortResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

/// Append-only recorder a sort engine writes into
///
/// Purely additive state. The recorder never mutates the sequence
/// itself; mutation is the engine's responsibility, mirrored here for
/// replay. No deduplication, no compaction, no size bound.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    ops: Vec<Op>,
}

impl TraceRecorder {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Append one operation
    pub fn record(&mut self, op: Op) {
        self.ops.push(op);
    }

    /// Operations recorded so far
    #[must_use]
    pub fn operations(&self) -> &[Op] {
        &self.ops
    }

    /// Number of operations recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Consume the recorder, yielding the immutable trace
    #[must_use]
    pub fn finish(self) -> Trace {
        Trace { ops: self.ops }
    }
}

/// Result of one sort invocation
///
/// The original input is preserved separately from the sorted output so
/// a replay can start clean: applying `trace` to a copy of `input`
/// reproduces `sorted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOutcome {
    /// Original input sequence, untouched by the engine
    pub input: Vec<i64>,
    /// Final sorted sequence as reported by the engine
    pub sorted: Vec<i64>,
    /// Operation log of the run
    pub trace: Trace,
}

impl SortOutcome {
    /// Serialize to JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Deserialize from JSON
    ///
    /// # Errors
    ///
    /// Returns error if deserialization fails
    pub fn from_json(json: &str) -> SortResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_starts_empty() {
        let rec = TraceRecorder::new();
        assert!(rec.is_empty());
        assert_eq!(rec.len(), 0);
    }

    #[test]
    fn test_recorder_appends_in_order() {
        let mut rec = TraceRecorder::new();
        rec.record(Op::compare(0, 1));
        rec.record(Op::overwrite(0, 7));
        rec.record(Op::swap(1, 2));

        assert_eq!(rec.len(), 3);
        assert_eq!(
            rec.operations(),
            &[Op::compare(0, 1), Op::overwrite(0, 7), Op::swap(1, 2)]
        );
    }

    #[test]
    fn test_recorder_keeps_duplicates() {
        let mut rec = TraceRecorder::new();
        rec.record(Op::compare(0, 1));
        rec.record(Op::compare(0, 1));
        assert_eq!(rec.len(), 2);
    }

    #[test]
    fn test_finish_preserves_order() {
        let mut rec = TraceRecorder::new();
        rec.record(Op::overwrite(1, 5));
        rec.record(Op::overwrite(0, 3));
        let trace = rec.finish();

        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get(0), Some(&Op::overwrite(1, 5)));
        assert_eq!(trace.get(1), Some(&Op::overwrite(0, 3)));
    }

    #[test]
    fn test_trace_counts() {
        let trace = Trace::from_ops(vec![
            Op::compare(0, 1),
            Op::compare(1, 2),
            Op::overwrite(0, 4),
            Op::swap(0, 2),
        ]);
        assert_eq!(trace.compare_count(), 2);
        assert_eq!(trace.overwrite_count(), 1);
        assert_eq!(trace.swap_count(), 1);
    }

    #[test]
    fn test_trace_iteration() {
        let trace = Trace::from_ops(vec![Op::compare(0, 1), Op::swap(0, 1)]);
        let kinds: Vec<_> = trace.into_iter().map(|op| op.kind()).collect();
        assert_eq!(kinds, vec![OpKind::Compare, OpKind::Swap]);
    }

    #[test]
    fn test_outcome_json_roundtrip() {
        let outcome = SortOutcome {
            input: vec![3, 1, 2],
            sorted: vec![1, 2, 3],
            trace: Trace::from_ops(vec![Op::overwrite(0, 1)]),
        };
        let json = outcome.to_json();
        let decoded = SortOutcome::from_json(&json).unwrap();
        assert_eq!(outcome, decoded);
    }

    #[test]
    fn test_trace_from_bad_json() {
        assert!(Trace::from_json("not json").is_err());
    }

    // Property tests using proptest
    proptest::proptest! {
        #[test]
        fn prop_trace_json_roundtrip(
            entries in proptest::collection::vec((0usize..64, -1000i64..1000), 0..32)
        ) {
            let ops = entries
                .into_iter()
                .map(|(index, value)| Op::overwrite(index, value))
                .collect();
            let trace = Trace::from_ops(ops);
            let decoded = Trace::from_json(&trace.to_json()).unwrap();
            proptest::prop_assert_eq!(trace, decoded);
        }
    }
}
