use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Timing and speed parameters for a [`PlaybackEngine`](super::PlaybackEngine).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Nominal ticks per second.
    #[schemars(title = "Frame Rate", range(min = 1, max = 240))]
    pub frame_rate: u32,
    /// Sub-frames a swap or highlight step spans at speed 1.0.
    #[schemars(title = "Interpolation Frames", range(min = 1, max = 120))]
    pub interpolation_frames: u32,
    /// Speed multiplier applied on construction.
    #[schemars(title = "Default Speed", range(min = 0.1, max = 10.0))]
    pub default_speed: f32,
    /// Lowest accepted speed multiplier.
    #[schemars(title = "Minimum Speed", range(min = 0.1, max = 10.0))]
    pub min_speed: f32,
    /// Highest accepted speed multiplier.
    #[schemars(title = "Maximum Speed", range(min = 0.1, max = 10.0))]
    pub max_speed: f32,
    /// Curve applied to bar motion during a swap.
    pub easing: EasingFunction,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            interpolation_frames: 8,
            default_speed: 1.0,
            min_speed: 0.5,
            max_speed: 3.0,
            easing: EasingFunction::DEFAULT,
        }
    }
}

impl PlaybackConfig {
    /// Smallest delay ever scheduled between ticks.
    pub const MIN_DELAY: Duration = Duration::from_millis(1);

    /// Time between ticks when processing is free.
    #[must_use]
    pub fn nominal_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Clamp `speed` into `[min_speed, max_speed]`. A reversed range is
    /// treated as its sorted counterpart.
    #[must_use]
    pub fn clamp_speed(&self, speed: f32) -> f32 {
        let lo = self.min_speed.min(self.max_speed);
        let hi = self.min_speed.max(self.max_speed);
        speed.clamp(lo, hi)
    }

    /// Next tick delay after a tick that took `processing`.
    #[must_use]
    pub fn compensated_delay(&self, processing: Duration) -> Duration {
        self.nominal_interval()
            .saturating_sub(processing)
            .max(Self::MIN_DELAY)
    }
}
