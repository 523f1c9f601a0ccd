//! Sequential cursor over a trace.

use sortrace_core::{Op, SortError, SortResult, Trace};

/// Cursor for walking a trace in emission order
#[derive(Debug, Clone)]
pub struct TraceCursor {
    ops: Vec<Op>,
    position: usize,
}

impl TraceCursor {
    /// Create an empty cursor
    #[must_use]
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            position: 0,
        }
    }

    /// Create a cursor over a trace
    #[must_use]
    pub fn from_trace(trace: &Trace) -> Self {
        Self::from_ops(trace.ops().to_vec())
    }

    /// Create a cursor from raw operations
    #[must_use]
    pub fn from_ops(ops: Vec<Op>) -> Self {
        Self { ops, position: 0 }
    }

    /// Consume and return the next operation
    pub fn next_op(&mut self) -> Option<Op> {
        let op = self.ops.get(self.position).copied();
        if op.is_some() {
            self.position += 1;
        }
        op
    }

    /// Look at the next operation without consuming it
    #[must_use]
    pub fn peek_op(&self) -> Option<Op> {
        self.ops.get(self.position).copied()
    }

    /// Whether any operations remain
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.position < self.ops.len()
    }

    /// Number of operations not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.ops.len().saturating_sub(self.position)
    }

    /// Current position
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total operation count
    #[must_use]
    pub fn total(&self) -> usize {
        self.ops.len()
    }

    /// Rewind to the beginning
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Seek to a specific position
    ///
    /// # Errors
    ///
    /// Returns error if position is out of bounds
    pub fn seek(&mut self, position: usize) -> SortResult<()> {
        if position > self.ops.len() {
            return Err(SortError::Validation {
                field: "position".to_string(),
                reason: format!("Position {} exceeds total {}", position, self.ops.len()),
            });
        }
        self.position = position;
        Ok(())
    }
}

impl Default for TraceCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TraceCursor {
    type Item = Op;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_op()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_new() {
        let cursor = TraceCursor::new();
        assert!(!cursor.has_more());
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.total(), 0);
    }

    #[test]
    fn test_cursor_from_trace() {
        let trace = Trace::from_ops(vec![Op::compare(0, 1), Op::swap(0, 1)]);
        let cursor = TraceCursor::from_trace(&trace);
        assert_eq!(cursor.total(), 2);
        assert_eq!(cursor.remaining(), 2);
        assert!(cursor.has_more());
    }

    #[test]
    fn test_cursor_next_op() {
        let mut cursor = TraceCursor::from_ops(vec![Op::overwrite(0, 5)]);
        assert_eq!(cursor.next_op(), Some(Op::overwrite(0, 5)));
        assert!(!cursor.has_more());
        assert_eq!(cursor.next_op(), None);
    }

    #[test]
    fn test_cursor_peek_does_not_consume() {
        let cursor = TraceCursor::from_ops(vec![Op::compare(0, 1)]);
        assert_eq!(cursor.peek_op(), Some(Op::compare(0, 1)));
        assert_eq!(cursor.remaining(), 1);
    }

    #[test]
    fn test_cursor_reset() {
        let mut cursor = TraceCursor::from_ops(vec![Op::compare(0, 1), Op::swap(0, 1)]);
        cursor.next_op();
        cursor.next_op();
        assert!(!cursor.has_more());
        cursor.reset();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn test_cursor_seek() {
        let mut cursor = TraceCursor::from_ops(vec![Op::compare(0, 1), Op::swap(0, 1)]);
        cursor.seek(1).unwrap();
        assert_eq!(cursor.next_op(), Some(Op::swap(0, 1)));
        assert!(cursor.seek(3).is_err());
    }

    #[test]
    fn test_cursor_iterator() {
        let cursor = TraceCursor::from_ops(vec![Op::compare(0, 1), Op::overwrite(1, 2)]);
        let ops: Vec<_> = cursor.collect();
        assert_eq!(ops, vec![Op::compare(0, 1), Op::overwrite(1, 2)]);
    }
}
