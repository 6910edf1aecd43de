//! Selection sort.

use super::traits::{AlgorithmInfo, SortAlgorithm};
use crate::step::{StepKind, TraceRecorder};

/// Finds the minimum of the unsorted suffix and swaps it to the front.
///
/// The long-range swap can carry an element past an equal one, so the
/// algorithm is not stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            key: "selection",
            name: "Selection Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            description: "Finds the minimum element from the unsorted portion \
                          and places it at the beginning.",
            stable: false,
        }
    }

    fn record(&self, rec: &mut TraceRecorder) {
        let n = rec.len();
        for i in 0..n {
            // The last position has nothing left to search.
            if i + 1 < n {
                Self::place_minimum(rec, i);
            }

            let settled = rec.value(i);
            rec.mark_sorted(
                i,
                format!("Element {settled} is now in correct position"),
            );
        }
    }
}

impl SelectionSort {
    fn place_minimum(rec: &mut TraceRecorder, i: usize) {
        let mut min_idx = i;
        rec.annotate(
            StepKind::Select,
            vec![i],
            format!("Finding minimum element from position {i}"),
        );

        for j in (i + 1)..rec.len() {
            let (current, candidate) = (rec.value(min_idx), rec.value(j));
            rec.compare(
                min_idx,
                j,
                format!("Comparing {current} with {candidate}"),
            );
            if candidate < current {
                min_idx = j;
                rec.annotate(
                    StepKind::Minimum,
                    vec![j],
                    format!("New minimum found: {candidate} at position {j}"),
                );
            }
        }

        if min_idx != i {
            let (front, min) = (rec.value(i), rec.value(min_idx));
            rec.swap(
                i,
                min_idx,
                format!("Swapping {front} with minimum {min}"),
            );
        }
    }
}
