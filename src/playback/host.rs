//! Host loops that fire the engine's timers.

use std::ops::ControlFlow;

use super::scheduler::{Scheduler, TimerQueue};
use super::PlaybackEngine;
use crate::util::frame_timing::FrameTiming;

/// Drives an engine on virtual time: every pending timer fires immediately
/// and the clock jumps to its deadline. Deterministic; used by tests and
/// for headless replay.
#[derive(Debug, Clone)]
pub struct VirtualLoop {
    queue: TimerQueue,
}

impl Default for VirtualLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualLoop {
    /// Loop over a fresh virtual-time queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: TimerQueue::virtual_time(),
        }
    }

    /// Scheduler handle to construct the engine with.
    #[must_use]
    pub fn scheduler(&self) -> TimerQueue {
        self.queue.clone()
    }

    /// Fire at most `limit` timers. Returns how many fired.
    pub fn run_ticks(
        &self,
        engine: &mut PlaybackEngine,
        limit: usize,
    ) -> usize {
        let mut fired = 0;
        while fired < limit {
            let Some(id) = self.queue.pop_next() else {
                break;
            };
            engine.on_timer(id);
            fired += 1;
        }
        fired
    }

    /// Fire timers until none are armed. Returns how many fired.
    pub fn run_until_idle(&self, engine: &mut PlaybackEngine) -> usize {
        self.run_ticks(engine, usize::MAX)
    }
}

/// Drives an engine on the wall clock, sleeping until each deadline.
///
/// Between ticks the loop calls a host hook with the engine; that is where
/// transport commands (pause, speed, reset) come in. The loop ends when the
/// hook breaks or when no timer is armed after the hook returns.
#[derive(Debug)]
pub struct RealtimeLoop {
    queue: TimerQueue,
    timing: FrameTiming,
}

impl RealtimeLoop {
    /// Loop over a fresh wall-clock queue, expecting `frame_rate` ticks per
    /// second.
    #[must_use]
    pub fn new(frame_rate: u32) -> Self {
        Self {
            queue: TimerQueue::realtime(),
            timing: FrameTiming::new(frame_rate),
        }
    }

    /// Scheduler handle to construct the engine with.
    #[must_use]
    pub fn scheduler(&self) -> TimerQueue {
        self.queue.clone()
    }

    /// Achieved tick rate.
    #[must_use]
    pub fn timing(&self) -> &FrameTiming {
        &self.timing
    }

    /// Run until the hook breaks or the engine goes idle.
    pub fn run<F>(&mut self, engine: &mut PlaybackEngine, mut hook: F)
    where
        F: FnMut(&mut PlaybackEngine) -> ControlFlow<()>,
    {
        loop {
            if hook(engine).is_break() {
                break;
            }
            let Some(deadline) = self.queue.next_deadline() else {
                break;
            };
            let wait = deadline.saturating_duration_since(self.queue.now());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
            if let Some(id) = self.queue.pop_due() {
                engine.on_timer(id);
                self.timing.record(self.queue.now());
            }
        }
        log::debug!(
            "realtime loop idle after {} ticks, {:.1} ticks/s, worst gap {:?}",
            self.timing.ticks(),
            self.timing.fps(),
            self.timing.worst_gap()
        );
    }
}
