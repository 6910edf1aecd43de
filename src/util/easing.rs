//! Easing curves applied to sub-frame progress.
//!
//! Sub-frame progress is linear in the sub-frame count; the curve only
//! shapes where a moving bar is drawn along its path.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for bar motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Smoothstep ease-in-out: `3t² - 2t³`.
    SmoothStep,
    /// Cubic Hermite with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Cubic Hermite ease-out with c1=0.33, c2=1.0.
    pub const DEFAULT: EasingFunction =
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate at `t`, clamped to [0.0, 1.0]. Every curve maps 0 to 0 and
    /// 1 to 1, so a bar always starts and ends exactly on a slot.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SmoothStep => t * t * (3.0 - 2.0 * t),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Lerp two f32 values.
#[inline]
#[must_use]
pub fn lerp_f32(t: f32, start: f32, end: f32) -> f32 {
    start + (end - start) * t
}
