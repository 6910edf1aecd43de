//! Shared utilities: easing curves for bar motion and tick-rate metering.

pub mod easing;
pub mod frame_timing;
