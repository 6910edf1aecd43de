use std::fmt;

use serde::Serialize;

/// Lifecycle of a playback run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Armed at position 0, or nothing loaded.
    #[default]
    Stopped,
    /// Ticks are scheduled.
    Playing,
    /// Position and interpolation are held; no tick is pending.
    Paused,
    /// Every step has been played.
    Completed,
}

impl RunState {
    /// Whether a tick should be pending.
    #[must_use]
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Completed => "completed",
        })
    }
}

/// Snapshot of the engine's transport state. Observers get copies; only
/// the engine changes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlaybackState {
    /// Steps fully played, `0..=trace.len()`.
    pub position: usize,
    /// Current lifecycle state.
    pub run_state: RunState,
    /// Speed multiplier in effect.
    pub speed: f32,
}

impl PlaybackState {
    pub(crate) fn new(speed: f32) -> Self {
        Self {
            position: 0,
            run_state: RunState::Stopped,
            speed,
        }
    }
}
