//! Quick sort with a Lomuto partition.

use super::traits::{AlgorithmInfo, SortAlgorithm};
use crate::step::{StepKind, TraceRecorder};

/// Partitions around the last element of the range, then recurses into the
/// two sides. Every position ends up either as a pivot or as a one-element
/// range, and is marked sorted at that moment.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            key: "quick",
            name: "Quick Sort",
            time_complexity: "O(n log n)",
            space_complexity: "O(log n)",
            description: "Partitions array around a pivot element, then sorts \
                          the partitions recursively.",
            stable: false,
        }
    }

    fn record(&self, rec: &mut TraceRecorder) {
        if let Some(last) = rec.len().checked_sub(1) {
            sort_range(rec, 0, last);
        }
    }
}

/// Sort the inclusive range `low..=high`.
fn sort_range(rec: &mut TraceRecorder, low: usize, high: usize) {
    if low == high {
        let v = rec.value(low);
        rec.mark_sorted(
            low,
            format!("Single element {v} is in correct position"),
        );
        return;
    }

    let p = partition(rec, low, high);
    let pivot = rec.value(p);
    rec.mark_sorted(p, format!("Pivot {pivot} is now in correct position"));

    if p > low {
        sort_range(rec, low, p - 1);
    }
    if p < high {
        sort_range(rec, p + 1, high);
    }
}

/// Partition `low..=high` around `values[high]`; returns the pivot's slot.
fn partition(rec: &mut TraceRecorder, low: usize, high: usize) -> usize {
    let pivot = rec.value(high);
    rec.annotate(
        StepKind::Pivot,
        vec![high],
        format!("Choosing {pivot} as pivot"),
    );

    // Next slot for an element not larger than the pivot.
    let mut store = low;
    for j in low..high {
        let v = rec.value(j);
        rec.compare(j, high, format!("Comparing {v} with pivot {pivot}"));
        if v <= pivot {
            if store != j {
                let displaced = rec.value(store);
                rec.swap(store, j, format!("Swapping {displaced} and {v}"));
            }
            store += 1;
        }
    }

    if store != high {
        rec.swap(
            store,
            high,
            format!("Placing pivot {pivot} in correct position"),
        );
    }
    store
}
