//! Step model: the operation records an algorithm emits and the trace that
//! holds them.
//!
//! A [`Step`] is pure data. It never refers back to the array it was
//! recorded against; the only array state a [`Trace`] carries is the initial
//! snapshot, and everything after that is reconstructed by replaying swaps.

mod recorder;
mod trace;

use serde::{Deserialize, Serialize};

pub use recorder::TraceRecorder;
pub use trace::{Trace, TraceError, TraceStats};

/// Operation tag of a [`Step`].
///
/// `Compare`, `Swap` and `MarkSorted` are the core vocabulary. The remaining
/// kinds are algorithm-specific annotations; the playback engine renders all
/// of them through the same generic highlight policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Two positions are compared.
    Compare,
    /// Two positions exchange their values.
    Swap,
    /// A position holds its final value.
    MarkSorted,
    /// A partition pivot is chosen.
    Pivot,
    /// The position currently being worked on.
    Select,
    /// A new running minimum was found.
    Minimum,
    /// A range is split into halves (`[left, mid, right]`).
    Divide,
    /// Two sorted runs start merging (`[left, mid, right]`).
    Merge,
}

impl StepKind {
    /// How the playback engine animates this kind.
    #[must_use]
    pub fn visual_policy(self) -> VisualPolicy {
        match self {
            Self::Swap => VisualPolicy::Motion,
            Self::MarkSorted => VisualPolicy::Settle,
            Self::Compare
            | Self::Pivot
            | Self::Select
            | Self::Minimum
            | Self::Divide
            | Self::Merge => VisualPolicy::Hold,
        }
    }

    /// Whether replaying this kind changes the array.
    #[must_use]
    pub fn mutates(self) -> bool {
        matches!(self, Self::Swap)
    }

    /// Short lowercase label, matching the serialized form.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::MarkSorted => "mark_sorted",
            Self::Pivot => "pivot",
            Self::Select => "select",
            Self::Minimum => "minimum",
            Self::Divide => "divide",
            Self::Merge => "merge",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

/// How a step is drawn across its interpolation sub-frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualPolicy {
    /// Bars travel between slots over the full interpolation window.
    Motion,
    /// Operands are highlighted for the full interpolation window.
    Hold,
    /// A single-frame colour change with nothing to interpolate.
    Settle,
}

impl VisualPolicy {
    /// Number of sub-frames a step with this policy occupies.
    #[must_use]
    pub fn sub_frames(self, interpolation_frames: u32) -> u32 {
        match self {
            Self::Motion | Self::Hold => interpolation_frames.max(1),
            Self::Settle => 1,
        }
    }
}

/// One atomic algorithmic operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Operation tag.
    pub kind: StepKind,
    /// Positions involved, in operation order. Never empty.
    pub operands: Vec<usize>,
    /// Human-readable sentence describing the operation.
    pub narration: String,
}

impl Step {
    /// Step from its parts.
    pub fn new(
        kind: StepKind,
        operands: Vec<usize>,
        narration: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            operands,
            narration: narration.into(),
        }
    }

    /// The two positions of a swap, if this step is one.
    #[must_use]
    pub fn swap_pair(&self) -> Option<(usize, usize)> {
        match (self.kind, self.operands.as_slice()) {
            (StepKind::Swap, &[a, b]) => Some((a, b)),
            _ => None,
        }
    }
}
