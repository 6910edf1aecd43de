//! Bubble sort with early exit.

use super::traits::{AlgorithmInfo, SortAlgorithm};
use crate::step::TraceRecorder;

/// Repeatedly swaps adjacent out-of-order pairs; the largest unsorted value
/// bubbles to the end of each pass. Stops after a pass with no swaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            key: "bubble",
            name: "Bubble Sort",
            time_complexity: "O(n²)",
            space_complexity: "O(1)",
            description: "Compares adjacent elements and swaps them if they \
                          are in wrong order. Repeats until no swaps are \
                          needed.",
            stable: true,
        }
    }

    fn record(&self, rec: &mut TraceRecorder) {
        let n = rec.len();
        for pass in 0..n {
            let last = n - pass - 1;
            let mut swapped = false;

            for j in 0..last {
                let (a, b) = (rec.value(j), rec.value(j + 1));
                rec.compare(j, j + 1, format!("Comparing {a} and {b}"));
                if a > b {
                    rec.swap(j, j + 1, format!("Swapping {a} and {b}"));
                    swapped = true;
                }
            }

            let settled = rec.value(last);
            rec.mark_sorted(
                last,
                format!("Element {settled} is now in correct position"),
            );

            if !swapped {
                for k in 0..last {
                    let v = rec.value(k);
                    rec.mark_sorted(
                        k,
                        format!("Element {v} is in correct position"),
                    );
                }
                break;
            }
        }
    }
}
