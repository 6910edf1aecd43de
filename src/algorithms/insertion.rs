//! Insertion sort.

use super::traits::{AlgorithmInfo, SortAlgorithm};
use crate::step::{StepKind, TraceRecorder};

/// Grows a sorted prefix by sinking each new element into place with
/// adjacent swaps. Stops sinking at the first element that is not larger,
/// which keeps equal elements in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            key: "insertion",
            name: "Insertion Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            description: "Inserts each element into its correct position in \
                          the sorted portion of the array.",
            stable: true,
        }
    }

    fn record(&self, rec: &mut TraceRecorder) {
        let n = rec.len();
        for i in 1..n {
            let key = rec.value(i);
            rec.annotate(
                StepKind::Select,
                vec![i],
                format!("Inserting element {key} into sorted portion"),
            );

            let mut j = i;
            while j > 0 {
                let left = rec.value(j - 1);
                rec.compare(j - 1, j, format!("Comparing {left} with {key}"));
                if left <= key {
                    break;
                }
                rec.swap(
                    j - 1,
                    j,
                    format!("Moving {left} one position right"),
                );
                j -= 1;
            }
        }

        // Prefix positions are only final once the last key is placed.
        for k in 0..n {
            let v = rec.value(k);
            rec.mark_sorted(
                k,
                format!("Element {v} is in its final position"),
            );
        }
    }
}
