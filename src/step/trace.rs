//! Trace: the ordered, finite, restartable step sequence for one
//! (algorithm, input) pair.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Step, StepKind};

/// Steps plus the array snapshot they were generated from.
///
/// Read-only once built. The playback engine shares it behind an `Arc` with
/// any inspector (progress display, narration log).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Trace {
    initial: Vec<i64>,
    steps: Vec<Step>,
}

/// Per-kind step counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TraceStats {
    /// `Compare` steps.
    pub comparisons: usize,
    /// `Swap` steps.
    pub swaps: usize,
    /// `MarkSorted` steps.
    pub marks: usize,
    /// Every other (annotation) step.
    pub annotations: usize,
}

impl Trace {
    /// Trace from an initial snapshot and its steps.
    #[must_use]
    pub fn new(initial: Vec<i64>, steps: Vec<Step>) -> Self {
        Self { initial, steps }
    }

    /// The array the steps were generated from.
    #[must_use]
    pub fn initial(&self) -> &[i64] {
        &self.initial
    }

    /// All steps in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Step at `position`, `None` past the end.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the trace has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Array state after the first `position` steps (clamped to the trace).
    #[must_use]
    pub fn replay_to(&self, position: usize) -> Vec<i64> {
        let mut values = self.initial.clone();
        for step in self.steps.iter().take(position) {
            if let Some((a, b)) = step.swap_pair() {
                if a < values.len() && b < values.len() {
                    values.swap(a, b);
                }
            }
        }
        values
    }

    /// Array state after every step.
    #[must_use]
    pub fn replay(&self) -> Vec<i64> {
        self.replay_to(self.steps.len())
    }

    /// Count steps by kind.
    #[must_use]
    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats::default();
        for step in &self.steps {
            match step.kind {
                StepKind::Compare => stats.comparisons += 1,
                StepKind::Swap => stats.swaps += 1,
                StepKind::MarkSorted => stats.marks += 1,
                _ => stats.annotations += 1,
            }
        }
        stats
    }

    /// Verify the step contract: operands are present and in bounds, swaps
    /// name two positions, narration is non-empty, every position is marked
    /// sorted, and replay yields a non-decreasing array.
    ///
    /// # Errors
    ///
    /// Returns the first [`TraceError`] found, in step order.
    pub fn check(&self) -> Result<(), TraceError> {
        let len = self.initial.len();
        let mut marked = vec![false; len];

        for (index, step) in self.steps.iter().enumerate() {
            if step.operands.is_empty() {
                return Err(TraceError::EmptyOperands { step: index });
            }
            if let Some(&operand) = step.operands.iter().find(|&&o| o >= len) {
                return Err(TraceError::OperandOutOfRange {
                    step: index,
                    operand,
                    len,
                });
            }
            if step.kind == StepKind::Swap && step.operands.len() != 2 {
                return Err(TraceError::MalformedSwap { step: index });
            }
            if step.narration.trim().is_empty() {
                return Err(TraceError::EmptyNarration { step: index });
            }
            if step.kind == StepKind::MarkSorted {
                for &operand in &step.operands {
                    marked[operand] = true;
                }
            }
        }

        if let Some(index) = marked.iter().position(|m| !m) {
            return Err(TraceError::Unmarked { index });
        }

        let end = self.replay();
        if let Some(index) = end.windows(2).position(|w| w[0] > w[1]) {
            return Err(TraceError::Unsorted { index });
        }
        Ok(())
    }
}

/// A trace that breaks the step contract. Always a programming error in
/// the adapter that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// A step has no operands.
    EmptyOperands {
        /// Offending step position.
        step: usize,
    },
    /// An operand does not index the array.
    OperandOutOfRange {
        /// Offending step position.
        step: usize,
        /// The bad operand.
        operand: usize,
        /// Array length.
        len: usize,
    },
    /// A swap without exactly two operands.
    MalformedSwap {
        /// Offending step position.
        step: usize,
    },
    /// A step with blank narration.
    EmptyNarration {
        /// Offending step position.
        step: usize,
    },
    /// A position never received a `MarkSorted` step.
    Unmarked {
        /// The unmarked position.
        index: usize,
    },
    /// Replay leaves `values[index] > values[index + 1]`.
    Unsorted {
        /// First descending position.
        index: usize,
    },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyOperands { step } => {
                write!(f, "step {step} has no operands")
            }
            Self::OperandOutOfRange { step, operand, len } => write!(
                f,
                "step {step} operand {operand} is outside an array of {len}"
            ),
            Self::MalformedSwap { step } => {
                write!(f, "step {step} is a swap without exactly two operands")
            }
            Self::EmptyNarration { step } => {
                write!(f, "step {step} has no narration")
            }
            Self::Unmarked { index } => {
                write!(f, "position {index} is never marked sorted")
            }
            Self::Unsorted { index } => {
                write!(f, "replay leaves position {index} out of order")
            }
        }
    }
}

impl std::error::Error for TraceError {}
