//! Smoothed tick-rate meter for the realtime host loop.

use web_time::{Duration, Instant};

/// Measured tick rate with exponential smoothing.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Last tick timestamp
    last_tick: Option<Instant>,
    /// Smoothed ticks per second
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    /// Ticks recorded so far
    ticks: u64,
    /// Longest gap between two ticks
    worst_gap: Duration,
}

impl FrameTiming {
    /// Meter seeded with the rate it expects to see.
    #[must_use]
    pub fn new(expected_fps: u32) -> Self {
        Self {
            last_tick: None,
            smoothed_fps: expected_fps as f32,
            smoothing: 0.05,
            ticks: 0,
            worst_gap: Duration::ZERO,
        }
    }

    /// Record a tick that ran at `now`.
    pub fn record(&mut self, now: Instant) {
        self.ticks += 1;
        let Some(last) = self.last_tick.replace(now) else {
            return;
        };
        let gap = now.saturating_duration_since(last);
        self.worst_gap = self.worst_gap.max(gap);

        let frame_time = gap.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Smoothed ticks per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Ticks recorded.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Longest gap seen between consecutive ticks.
    #[must_use]
    pub fn worst_gap(&self) -> Duration {
        self.worst_gap
    }
}
