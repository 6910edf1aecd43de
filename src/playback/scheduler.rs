//! Timer seam between the engine and whatever drives it.

use std::cell::RefCell;
use std::rc::Rc;

use web_time::{Duration, Instant};

/// Handle for one scheduled tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Single-shot timers on some clock.
///
/// Firing is the host's job: it calls
/// [`PlaybackEngine::on_timer`](super::PlaybackEngine::on_timer) with the id
/// once the deadline passes. Cancelling an id that already fired or never
/// existed is a no-op.
pub trait Scheduler {
    /// Current time on this scheduler's clock.
    fn now(&self) -> Instant;
    /// Arm a timer `delay` from now.
    fn schedule_after(&self, delay: Duration) -> TimerId;
    /// Disarm `id`.
    fn cancel(&self, id: TimerId);
}

#[derive(Debug, Clone, Copy)]
enum Clock {
    /// Time only moves when told to.
    Virtual(Instant),
    /// Wall clock.
    Realtime,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    deadline: Instant,
}

#[derive(Debug)]
struct QueueState {
    clock: Clock,
    next_id: u64,
    pending: Vec<Timer>,
}

/// Shared single-threaded timer queue.
///
/// Clones share the same queue: hand one clone to the engine as its
/// [`Scheduler`] and keep another in the host loop to pop due timers.
#[derive(Debug, Clone)]
pub struct TimerQueue {
    inner: Rc<RefCell<QueueState>>,
}

impl TimerQueue {
    fn with_clock(clock: Clock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(QueueState {
                clock,
                next_id: 1,
                pending: Vec::new(),
            })),
        }
    }

    /// Queue on a virtual clock that starts now and only moves through
    /// [`advance`](Self::advance) and [`pop_next`](Self::pop_next).
    #[must_use]
    pub fn virtual_time() -> Self {
        Self::with_clock(Clock::Virtual(Instant::now()))
    }

    /// Queue on the wall clock.
    #[must_use]
    pub fn realtime() -> Self {
        Self::with_clock(Clock::Realtime)
    }

    /// Move a virtual clock forward. Ignored on the wall clock.
    pub fn advance(&self, by: Duration) {
        let mut state = self.inner.borrow_mut();
        match &mut state.clock {
            Clock::Virtual(now) => *now += by,
            Clock::Realtime => {
                log::debug!("advance({by:?}) ignored on a realtime queue");
            }
        }
    }

    /// Number of armed timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Whether no timer is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().pending.is_empty()
    }

    /// Earliest deadline, if any timer is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner
            .borrow()
            .pending
            .iter()
            .map(|t| t.deadline)
            .min()
    }

    /// Remove the earliest timer (ties fire in arming order). A virtual
    /// clock jumps forward to its deadline.
    pub fn pop_next(&self) -> Option<TimerId> {
        let mut state = self.inner.borrow_mut();
        let index = state
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, t)| (t.deadline, t.id))
            .map(|(i, _)| i)?;
        let timer = state.pending.remove(index);
        if let Clock::Virtual(now) = &mut state.clock {
            *now = (*now).max(timer.deadline);
        }
        drop(state);
        Some(timer.id)
    }

    /// Remove the earliest timer if its deadline has passed.
    pub fn pop_due(&self) -> Option<TimerId> {
        let now = self.now();
        match self.next_deadline() {
            Some(deadline) if deadline <= now => self.pop_next(),
            _ => None,
        }
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Instant {
        match self.inner.borrow().clock {
            Clock::Virtual(now) => now,
            Clock::Realtime => Instant::now(),
        }
    }

    fn schedule_after(&self, delay: Duration) -> TimerId {
        let deadline = self.now() + delay;
        let mut state = self.inner.borrow_mut();
        let id = TimerId(state.next_id);
        state.next_id += 1;
        state.pending.push(Timer { id, deadline });
        drop(state);
        log::trace!("armed {id:?} in {delay:?}");
        id
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().pending.retain(|t| t.id != id);
    }
}
