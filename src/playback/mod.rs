//! Playback engine: turns a [`Trace`](crate::step::Trace) into a paced
//! stream of interpolated [`Frame`]s under transport control.
//!
//! # Timing
//!
//! Each tick adds `speed` to a fractional sub-frame credit and spends whole
//! credits advancing the current step one sub-frame at a time. A step spans
//! [`VisualPolicy::sub_frames`](crate::step::VisualPolicy::sub_frames)
//! sub-frames, so at speed 1.0 a swap takes `interpolation_frames` ticks and
//! a sorted-mark takes one. Sub-frame progress is `k / sub_frames`; the
//! configured easing curve shapes only where moving bars are drawn.
//!
//! The delay before the next tick is the nominal interval minus the time the
//! current tick took, never less than [`PlaybackConfig::MIN_DELAY`].
//!
//! # Driving the engine
//!
//! The engine never blocks. It arms timers on a [`Scheduler`] and the host
//! fires them back through [`PlaybackEngine::on_timer`]. [`VirtualLoop`]
//! does this on virtual time; [`RealtimeLoop`] sleeps on the wall clock and
//! runs a command hook between ticks.

mod config;
mod engine;
mod frame;
mod host;
mod scheduler;
mod state;

pub use config::PlaybackConfig;
pub use engine::{FrameResult, PlaybackEngine};
pub use frame::{ActiveStep, Bar, BarRole, Frame};
pub use host::{RealtimeLoop, VirtualLoop};
pub use scheduler::{Scheduler, TimerId, TimerQueue};
pub use state::{PlaybackState, RunState};
