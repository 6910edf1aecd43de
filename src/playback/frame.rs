//! Frames handed to the presentation surface.

use serde::Serialize;

use super::RunState;
use crate::step::StepKind;
use crate::util::easing::{lerp_f32, EasingFunction};

/// Visual role of a bar in one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarRole {
    /// Not involved in the active step.
    #[default]
    Idle,
    /// Operand of a `Compare` step.
    Comparing,
    /// Operand of a `Swap` step.
    Swapping,
    /// Operand of any annotation step (pivot, minimum, merge range...).
    Highlighted,
    /// Holds its final value. Overrides every other role.
    Sorted,
}

impl BarRole {
    /// Role given to the operands of a `kind` step.
    #[must_use]
    pub fn for_step(kind: StepKind) -> Self {
        match kind {
            StepKind::Compare => Self::Comparing,
            StepKind::Swap => Self::Swapping,
            StepKind::MarkSorted => Self::Sorted,
            StepKind::Pivot
            | StepKind::Select
            | StepKind::Minimum
            | StepKind::Divide
            | StepKind::Merge => Self::Highlighted,
        }
    }
}

/// One bar of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// Height.
    pub value: i64,
    /// Horizontal slot; fractional while the bar travels during a swap.
    pub slot: f32,
    /// How to colour it.
    pub role: BarRole,
}

/// The step being drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveStep {
    /// Step kind.
    pub kind: StepKind,
    /// Step operands.
    pub operands: Vec<usize>,
    /// Step narration.
    pub narration: String,
    /// Linear sub-frame progress in `(0, 1]`. At 1.0 the step's effect is
    /// already in [`Frame::values`].
    pub progress: f32,
}

/// Everything needed to draw one animation frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// One bar per array position, in position order.
    pub bars: Vec<Bar>,
    /// Array state after the steps before [`position`](Self::position).
    pub values: Vec<i64>,
    /// The step in flight or just completed, `None` on reset frames.
    pub active: Option<ActiveStep>,
    /// Steps fully played.
    pub position: usize,
    /// Sub-frames elapsed inside the current step (0 on step boundaries).
    pub sub_frame: u32,
    /// Trace length.
    pub total: usize,
    /// Run state when the frame was composed.
    pub run_state: RunState,
}

impl Frame {
    /// Fraction of the trace played, counting only completed steps.
    #[must_use]
    pub fn completion(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.position as f32 / self.total as f32
        }
    }
}

/// Lay out bars for `values`.
///
/// Swapping bars slide towards each other's slot along `easing` until the
/// step completes; after that the swap is part of `values` and every bar
/// sits on its own slot.
pub(crate) fn layout_bars(
    values: &[i64],
    sorted: &[bool],
    active: Option<&ActiveStep>,
    easing: EasingFunction,
) -> Vec<Bar> {
    let mut bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| Bar {
            value,
            slot: i as f32,
            role: BarRole::Idle,
        })
        .collect();

    if let Some(step) = active {
        let role = BarRole::for_step(step.kind);
        for &op in &step.operands {
            if let Some(bar) = bars.get_mut(op) {
                bar.role = role;
            }
        }

        if step.kind == StepKind::Swap && step.progress < 1.0 {
            if let &[a, b] = step.operands.as_slice() {
                let t = easing.evaluate(step.progress);
                if a < bars.len() && b < bars.len() {
                    bars[a].slot = lerp_f32(t, a as f32, b as f32);
                    bars[b].slot = lerp_f32(t, b as f32, a as f32);
                }
            }
        }
    }

    for (bar, &done) in bars.iter_mut().zip(sorted) {
        if done {
            bar.role = BarRole::Sorted;
        }
    }
    bars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(
        kind: StepKind,
        operands: Vec<usize>,
        progress: f32,
    ) -> ActiveStep {
        ActiveStep {
            kind,
            operands,
            narration: "step".into(),
            progress,
        }
    }

    #[test]
    fn idle_bars_sit_on_their_slots() {
        let bars =
            layout_bars(&[3, 1], &[false; 2], None, EasingFunction::Linear);
        assert_eq!(bars[0].slot, 0.0);
        assert_eq!(bars[1].slot, 1.0);
        assert!(bars.iter().all(|b| b.role == BarRole::Idle));
    }

    #[test]
    fn swapping_bars_move_halfway() {
        let step = active(StepKind::Swap, vec![0, 2], 0.5);
        let bars = layout_bars(
            &[9, 5, 1],
            &[false; 3],
            Some(&step),
            EasingFunction::Linear,
        );
        assert_eq!(bars[0].slot, 1.0);
        assert_eq!(bars[2].slot, 1.0);
        assert_eq!(bars[0].role, BarRole::Swapping);
        assert_eq!(bars[1].role, BarRole::Idle);
    }

    #[test]
    fn completed_swap_is_not_interpolated() {
        let step = active(StepKind::Swap, vec![0, 1], 1.0);
        let bars = layout_bars(
            &[1, 9],
            &[false; 2],
            Some(&step),
            EasingFunction::DEFAULT,
        );
        assert_eq!(bars[0].slot, 0.0);
        assert_eq!(bars[1].slot, 1.0);
    }

    #[test]
    fn sorted_overrides_step_roles() {
        let step = active(StepKind::Compare, vec![0, 1], 0.5);
        let bars = layout_bars(
            &[1, 2],
            &[false, true],
            Some(&step),
            EasingFunction::Linear,
        );
        assert_eq!(bars[0].role, BarRole::Comparing);
        assert_eq!(bars[1].role, BarRole::Sorted);
    }

    #[test]
    fn annotation_kinds_highlight() {
        assert_eq!(BarRole::for_step(StepKind::Pivot), BarRole::Highlighted);
        assert_eq!(BarRole::for_step(StepKind::Merge), BarRole::Highlighted);
        assert_eq!(BarRole::for_step(StepKind::MarkSorted), BarRole::Sorted);
    }
}
