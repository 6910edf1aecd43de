//! Top-down merge sort with an in-place merge.

use super::traits::{AlgorithmInfo, SortAlgorithm};
use crate::step::{StepKind, TraceRecorder};

/// Splits the range in halves, sorts each recursively, then merges.
///
/// The merge works in place: when the head of the right run is smaller it is
/// carried left across the remaining left run by adjacent swaps. Ties take
/// the left element, so the sort is stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            key: "merge",
            name: "Merge Sort",
            time_complexity: "O(n log n)",
            space_complexity: "O(n)",
            description: "Divides array into halves, sorts them recursively, \
                          then merges the sorted halves back together.",
            stable: true,
        }
    }

    fn record(&self, rec: &mut TraceRecorder) {
        let n = rec.len();
        sort_range(rec, 0, n.saturating_sub(1));
        for k in 0..n {
            let v = rec.value(k);
            rec.mark_sorted(
                k,
                format!("Element {v} is in its final position"),
            );
        }
    }
}

/// Sort the inclusive range `left..=right`.
fn sort_range(rec: &mut TraceRecorder, left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    rec.annotate(
        StepKind::Divide,
        vec![left, mid, right],
        format!("Dividing array from {left} to {right} at position {mid}"),
    );
    sort_range(rec, left, mid);
    sort_range(rec, mid + 1, right);
    merge_runs(rec, left, mid, right);
}

/// Merge the sorted runs `left..=mid` and `mid + 1..=right`.
fn merge_runs(rec: &mut TraceRecorder, left: usize, mid: usize, right: usize) {
    rec.annotate(
        StepKind::Merge,
        vec![left, mid, right],
        format!(
            "Merging sorted subarrays [{left}..{mid}] and [{}..{right}]",
            mid + 1
        ),
    );

    // Left run is i..j, right run is j..=right.
    let mut i = left;
    let mut j = mid + 1;
    while i < j && j <= right {
        let (a, b) = (rec.value(i), rec.value(j));
        rec.compare(i, j, format!("Comparing {a} and {b}"));
        if a <= b {
            i += 1;
            continue;
        }
        for k in (i..j).rev() {
            let passed = rec.value(k);
            rec.swap(k, k + 1, format!("Moving {b} ahead of {passed}"));
        }
        i += 1;
        j += 1;
    }
}
