//! SORTRACE Sort Engines
//!
//! Four stateless, trace-emitting sort engines behind one trait, plus
//! the validated dispatch boundary. Each run is a pure function of its
//! input and the recorder it writes to; engines never mutate the
//! caller's sequence.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod counting;
pub mod engine;
pub mod insertion;
pub mod merge;
pub mod selection;

pub use counting::CountingSort;
pub use engine::{SortEngine, engine_for, run};
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use selection::SelectionSort;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sortrace_core::{Algorithm, TraceRecorder};

    fn sorted_copy(input: &[i64]) -> Vec<i64> {
        let mut expected = input.to_vec();
        expected.sort_unstable();
        expected
    }

    proptest! {
        #[test]
        fn prop_comparison_engines_sort(input in prop::collection::vec(-1000i64..1000, 1..64)) {
            for algorithm in [Algorithm::Merge, Algorithm::Insertion, Algorithm::Selection] {
                let outcome = run(algorithm, &input).unwrap();
                prop_assert_eq!(&outcome.sorted, &sorted_copy(&input));
                prop_assert_eq!(&outcome.input, &input);
            }
        }

        #[test]
        fn prop_counting_engine_sorts(input in prop::collection::vec(0i64..500, 1..64)) {
            let outcome = run(Algorithm::Counting, &input).unwrap();
            prop_assert_eq!(&outcome.sorted, &sorted_copy(&input));
        }

        #[test]
        fn prop_counting_trace_has_no_compares(input in prop::collection::vec(0i64..500, 1..64)) {
            let outcome = run(Algorithm::Counting, &input).unwrap();
            prop_assert_eq!(outcome.trace.compare_count(), 0);
            prop_assert_eq!(outcome.trace.overwrite_count(), input.len());
        }

        #[test]
        fn prop_sorted_input_needs_no_swaps(mut input in prop::collection::vec(-1000i64..1000, 1..64)) {
            input.sort_unstable();
            let outcome = run(Algorithm::Selection, &input).unwrap();
            prop_assert_eq!(outcome.trace.swap_count(), 0);
        }
    }

    #[test]
    fn test_single_element_traces() {
        for engine in [
            engine_for(Algorithm::Merge),
            engine_for(Algorithm::Insertion),
            engine_for(Algorithm::Selection),
        ] {
            let mut rec = TraceRecorder::new();
            let sorted = engine.sort(&[42], &mut rec).unwrap();
            assert_eq!(sorted, vec![42]);
            assert!(rec.is_empty());
        }

        // Counting sort emits one write per placement, even for a
        // single element.
        let mut rec = TraceRecorder::new();
        let sorted = CountingSort.sort(&[42], &mut rec).unwrap();
        assert_eq!(sorted, vec![42]);
        assert_eq!(rec.len(), 1);
    }

    #[test]
    fn test_engines_tolerate_empty_input() {
        for algorithm in Algorithm::ALL {
            let mut rec = TraceRecorder::new();
            let sorted = engine_for(algorithm).sort(&[], &mut rec).unwrap();
            assert!(sorted.is_empty());
            assert!(rec.is_empty());
        }
    }
}
