//! Builder the algorithm adapters record into.

use super::{Step, StepKind, Trace};

/// Records steps while keeping a working copy of the array in sync.
///
/// Adapters read values through [`value`](Self::value) and mutate only via
/// [`swap`](Self::swap), so the recorded trace replays to exactly the array
/// the adapter saw. Operand bounds are asserted in debug builds: an adapter
/// that names a position outside the array has broken its contract.
#[derive(Debug, Clone)]
pub struct TraceRecorder {
    initial: Vec<i64>,
    working: Vec<i64>,
    steps: Vec<Step>,
}

impl TraceRecorder {
    /// Recorder over a copy of `values`.
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        Self {
            initial: values.to_vec(),
            working: values.to_vec(),
            steps: Vec::new(),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.working.len()
    }

    /// Whether the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Current value at `index` in the working copy.
    #[must_use]
    pub fn value(&self, index: usize) -> i64 {
        debug_assert!(index < self.working.len(), "read past the array");
        self.working[index]
    }

    /// The working copy as it stands after every recorded swap.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.working
    }

    /// Record a comparison of `a` and `b`.
    pub fn compare(
        &mut self,
        a: usize,
        b: usize,
        narration: impl Into<String>,
    ) {
        self.push(StepKind::Compare, vec![a, b], narration);
    }

    /// Record a swap of `a` and `b` and apply it to the working copy.
    pub fn swap(&mut self, a: usize, b: usize, narration: impl Into<String>) {
        self.push(StepKind::Swap, vec![a, b], narration);
        self.working.swap(a, b);
    }

    /// Record that `index` holds its final value.
    pub fn mark_sorted(&mut self, index: usize, narration: impl Into<String>) {
        self.push(StepKind::MarkSorted, vec![index], narration);
    }

    /// Record an annotation step that does not change the array.
    pub fn annotate(
        &mut self,
        kind: StepKind,
        operands: Vec<usize>,
        narration: impl Into<String>,
    ) {
        debug_assert!(!kind.mutates(), "annotations cannot mutate");
        self.push(kind, operands, narration);
    }

    /// Finish recording.
    #[must_use]
    pub fn finish(self) -> Trace {
        Trace::new(self.initial, self.steps)
    }

    fn push(
        &mut self,
        kind: StepKind,
        operands: Vec<usize>,
        narration: impl Into<String>,
    ) {
        debug_assert!(!operands.is_empty(), "{kind} step without operands");
        debug_assert!(
            operands.iter().all(|&o| o < self.working.len()),
            "{kind} operand out of range: {operands:?} over {}",
            self.working.len()
        );
        let narration = narration.into();
        debug_assert!(
            !narration.trim().is_empty(),
            "{kind} step without narration"
        );
        log::trace!("{kind} {operands:?}: {narration}");
        self.steps.push(Step {
            kind,
            operands,
            narration,
        });
    }
}
