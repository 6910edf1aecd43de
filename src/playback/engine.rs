//! The playback engine: transport state machine plus the per-tick advance.

use std::error::Error;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use web_time::Duration;

use super::frame::{layout_bars, ActiveStep, Frame};
use super::scheduler::{Scheduler, TimerId};
use super::{PlaybackConfig, PlaybackState, RunState};
use crate::step::{Step, StepKind, Trace};

/// What a frame callback returns. An `Err` is logged and playback goes on.
pub type FrameResult = Result<(), Box<dyn Error>>;

type FrameCallback = Box<dyn FnMut(&Frame) -> FrameResult>;
type CompleteCallback = Box<dyn FnMut()>;
type StepCallback = Box<dyn FnMut(usize, &str)>;

/// Plays a [`Trace`] as a sequence of interpolated frames.
///
/// Single-threaded and cooperative: the host fires timers through
/// [`on_timer`](Self::on_timer) and issues transport commands between
/// ticks. Callbacks run inside a tick and must not call back into the
/// engine.
pub struct PlaybackEngine {
    config: PlaybackConfig,
    scheduler: Box<dyn Scheduler>,
    trace: Option<Arc<Trace>>,
    state: PlaybackState,

    /// Array after `state.position` steps.
    values: Vec<i64>,
    /// Positions marked sorted so far.
    sorted: Vec<bool>,
    /// Sub-frames elapsed in the current step.
    sub_frame: u32,
    /// Fractional sub-frames owed to the next tick.
    credit: f32,

    pending: Option<TimerId>,
    next_delay: Duration,

    frame_callbacks: Vec<FrameCallback>,
    complete_callbacks: Vec<CompleteCallback>,
    step_callbacks: Vec<StepCallback>,
}

impl fmt::Debug for PlaybackEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackEngine")
            .field("state", &self.state)
            .field("sub_frame", &self.sub_frame)
            .field("credit", &self.credit)
            .field("total", &self.total())
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl PlaybackEngine {
    /// Engine with nothing loaded, scheduling ticks on `scheduler`.
    pub fn new(
        config: PlaybackConfig,
        scheduler: impl Scheduler + 'static,
    ) -> Self {
        let speed = config.clamp_speed(config.default_speed);
        Self {
            config,
            scheduler: Box::new(scheduler),
            trace: None,
            state: PlaybackState::new(speed),
            values: Vec::new(),
            sorted: Vec::new(),
            sub_frame: 0,
            credit: 0.0,
            pending: None,
            next_delay: config.nominal_interval(),
            frame_callbacks: Vec::new(),
            complete_callbacks: Vec::new(),
            step_callbacks: Vec::new(),
        }
    }

    // -- Subscriptions ----------------------------------------------------

    /// Call `callback` with every emitted frame.
    pub fn on_frame<F>(&mut self, callback: F)
    where
        F: FnMut(&Frame) -> FrameResult + 'static,
    {
        self.frame_callbacks.push(Box::new(callback));
    }

    /// Call `callback` each time playback reaches the end of the trace.
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.complete_callbacks.push(Box::new(callback));
    }

    /// Call `callback` with the 1-based step number and its narration when
    /// a step starts playing.
    pub fn on_step<F>(&mut self, callback: F)
    where
        F: FnMut(usize, &str) + 'static,
    {
        self.step_callbacks.push(Box::new(callback));
    }

    // -- Commands ---------------------------------------------------------

    /// Reset, then arm with `trace`. An empty trace completes immediately.
    pub fn load_trace(&mut self, trace: Arc<Trace>) {
        debug_assert!(
            trace.check().is_ok(),
            "loaded trace breaks the step contract: {:?}",
            trace.check()
        );
        log::debug!(
            "loading trace of {} steps over {} values",
            trace.len(),
            trace.initial().len()
        );
        let empty = trace.is_empty();
        self.trace = Some(trace);
        self.reset();
        if empty {
            self.complete();
        }
    }

    /// Start or resume. No-op unless Stopped with a trace, or Paused.
    pub fn play(&mut self) {
        match self.state.run_state {
            RunState::Playing | RunState::Completed => return,
            RunState::Stopped if self.trace.is_none() => {
                log::warn!("play ignored: no trace loaded");
                return;
            }
            RunState::Stopped | RunState::Paused => {}
        }
        self.state.run_state = RunState::Playing;
        self.schedule(self.config.nominal_interval());
    }

    /// Resume from Paused. Same as [`play`](Self::play).
    pub fn resume(&mut self) {
        self.play();
    }

    /// Hold position and interpolation. No-op unless Playing.
    pub fn pause(&mut self) {
        if self.state.run_state != RunState::Playing {
            return;
        }
        self.cancel_pending();
        self.state.run_state = RunState::Paused;
    }

    /// Back to position 0 and Stopped from any state. Emits a frame of the
    /// initial snapshot.
    pub fn reset(&mut self) {
        self.cancel_pending();
        let initial = self
            .trace
            .as_ref()
            .map(|t| t.initial().to_vec())
            .unwrap_or_default();
        self.sorted = vec![false; initial.len()];
        self.values = initial;
        self.state.position = 0;
        self.state.run_state = RunState::Stopped;
        self.sub_frame = 0;
        self.credit = 0.0;
        self.next_delay = self.config.nominal_interval();

        let frame = self.compose(None);
        self.emit(&frame);
    }

    /// Change the speed multiplier. Clamped into the configured range;
    /// non-finite values are ignored. Takes effect on the next tick.
    pub fn set_speed(&mut self, multiplier: f32) {
        if !multiplier.is_finite() {
            log::warn!("ignoring non-finite speed {multiplier}");
            return;
        }
        let speed = self.config.clamp_speed(multiplier);
        if speed != multiplier {
            log::debug!("speed {multiplier} clamped to {speed}");
        }
        self.state.speed = speed;
    }

    /// Fire a timer. Ids other than the pending tick (cancelled or
    /// superseded) are ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.pending != Some(id) {
            log::trace!("ignoring stale timer {id:?}");
            return;
        }
        self.pending = None;
        if self.state.run_state.is_playing() {
            self.tick();
        }
    }

    // -- Inspectors -------------------------------------------------------

    /// Copy of the transport state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current run state.
    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    /// `(position, trace length)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.state.position, self.total())
    }

    /// The loaded trace.
    #[must_use]
    pub fn trace(&self) -> Option<&Arc<Trace>> {
        self.trace.as_ref()
    }

    /// Delay used for the most recently scheduled tick.
    #[must_use]
    pub fn next_delay(&self) -> Duration {
        self.next_delay
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    // -- Tick -------------------------------------------------------------

    fn total(&self) -> usize {
        self.trace.as_ref().map_or(0, |t| t.len())
    }

    fn tick(&mut self) {
        let Some(trace) = self.trace.clone() else {
            return;
        };
        let started = self.scheduler.now();

        self.credit += self.state.speed;
        let mut partial = false;
        while self.credit >= 1.0 {
            let Some(step) = trace.get(self.state.position) else {
                break;
            };
            if self.sub_frame == 0 {
                self.announce(step);
            }
            self.credit -= 1.0;
            self.sub_frame += 1;

            let sub_frames = self.sub_frames(step);
            if self.sub_frame >= sub_frames {
                self.finish_step(step);
                partial = false;
            } else {
                partial = true;
            }
        }

        if partial {
            if let Some(step) = trace.get(self.state.position) {
                let progress =
                    self.sub_frame as f32 / self.sub_frames(step) as f32;
                let frame = self.compose(Some(active_step(step, progress)));
                self.emit(&frame);
            }
        }

        if self.state.position >= trace.len() {
            self.complete();
            return;
        }

        let processing =
            self.scheduler.now().saturating_duration_since(started);
        self.schedule(self.config.compensated_delay(processing));
    }

    fn sub_frames(&self, step: &Step) -> u32 {
        step.kind
            .visual_policy()
            .sub_frames(self.config.interpolation_frames)
    }

    fn announce(&mut self, step: &Step) {
        let number = self.state.position + 1;
        log::debug!("step {number}: {}", step.narration);
        for callback in &mut self.step_callbacks {
            guarded("step", number, || {
                callback(number, &step.narration);
                Ok(())
            });
        }
    }

    fn finish_step(&mut self, step: &Step) {
        if let Some((a, b)) = step.swap_pair() {
            if a < self.values.len() && b < self.values.len() {
                self.values.swap(a, b);
            }
        }
        if step.kind == StepKind::MarkSorted {
            for &op in &step.operands {
                if let Some(done) = self.sorted.get_mut(op) {
                    *done = true;
                }
            }
        }
        self.state.position += 1;
        self.sub_frame = 0;

        let frame = self.compose(Some(active_step(step, 1.0)));
        self.emit(&frame);
    }

    fn complete(&mut self) {
        self.cancel_pending();
        self.credit = 0.0;
        self.state.run_state = RunState::Completed;
        let total = self.total();
        log::info!("playback completed after {total} steps");
        for callback in &mut self.complete_callbacks {
            guarded("completion", total, || {
                callback();
                Ok(())
            });
        }
    }

    // -- Timers -----------------------------------------------------------

    fn schedule(&mut self, delay: Duration) {
        self.cancel_pending();
        self.next_delay = delay;
        self.pending = Some(self.scheduler.schedule_after(delay));
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
    }

    // -- Frames -----------------------------------------------------------

    fn compose(&self, active: Option<ActiveStep>) -> Frame {
        let bars = layout_bars(
            &self.values,
            &self.sorted,
            active.as_ref(),
            self.config.easing,
        );
        Frame {
            bars,
            values: self.values.clone(),
            active,
            position: self.state.position,
            sub_frame: self.sub_frame,
            total: self.total(),
            run_state: self.state.run_state,
        }
    }

    fn emit(&mut self, frame: &Frame) {
        for callback in &mut self.frame_callbacks {
            guarded("frame", frame.position, || callback(frame));
        }
    }
}

/// Run a presentation callback so that neither an `Err` nor a panic can
/// leave the engine half-way through a tick.
fn guarded(what: &str, step: usize, callback: impl FnOnce() -> FrameResult) {
    match catch_unwind(AssertUnwindSafe(callback)) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => log::warn!("{what} callback failed at step {step}: {e}"),
        Err(_) => log::error!("{what} callback panicked at step {step}"),
    }
}

fn active_step(step: &Step, progress: f32) -> ActiveStep {
    ActiveStep {
        kind: step.kind,
        operands: step.operands.clone(),
        narration: step.narration.clone(),
        progress,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::algorithms::{
        AlgorithmRegistry, BubbleSort, QuickSort, SortAlgorithm,
    };
    use crate::playback::{BarRole, TimerQueue, VirtualLoop};
    use crate::util::easing::EasingFunction;
    use crate::validation::{validate, ArrayBounds};

    fn trace_for(algorithm: &dyn SortAlgorithm, raw: &str) -> Arc<Trace> {
        let input = validate(raw, &ArrayBounds::default()).unwrap();
        Arc::new(algorithm.generate_trace(&input))
    }

    fn engine(config: PlaybackConfig) -> (PlaybackEngine, VirtualLoop) {
        let host = VirtualLoop::new();
        (PlaybackEngine::new(config, host.scheduler()), host)
    }

    fn record_frames(engine: &mut PlaybackEngine) -> Rc<RefCell<Vec<Frame>>> {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&frames);
        engine.on_frame(move |frame| {
            sink.borrow_mut().push(frame.clone());
            Ok(())
        });
        frames
    }

    fn count_completions(engine: &mut PlaybackEngine) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let sink = Rc::clone(&count);
        engine.on_complete(move || sink.set(sink.get() + 1));
        count
    }

    #[test]
    fn single_element_completes_after_one_tick() {
        for algorithm in AlgorithmRegistry::default().iter() {
            let name = algorithm.info().name;
            let (mut engine, host) = engine(PlaybackConfig::default());
            let completions = count_completions(&mut engine);
            engine.load_trace(trace_for(&**algorithm, "42"));
            assert_eq!(engine.progress(), (0, 1), "{name}");

            engine.play();
            assert_eq!(host.run_ticks(&mut engine, 1), 1, "{name}");
            assert_eq!(engine.run_state(), RunState::Completed, "{name}");
            assert_eq!(engine.progress(), (1, 1), "{name}");
            assert_eq!(completions.get(), 1, "{name}");
            assert_eq!(host.run_until_idle(&mut engine), 0, "{name}");
        }
    }

    #[test]
    fn empty_trace_completes_on_load() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        let completions = count_completions(&mut engine);
        engine.load_trace(Arc::new(Trace::default()));
        assert_eq!(engine.run_state(), RunState::Completed);
        assert_eq!(completions.get(), 1);

        engine.play();
        assert_eq!(engine.run_state(), RunState::Completed);
        assert!(host.scheduler().is_empty());
    }

    #[test]
    fn play_without_a_trace_is_ignored() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        engine.play();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert!(host.scheduler().is_empty());
    }

    #[test]
    fn frames_advance_monotonically_through_every_step() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        let frames = record_frames(&mut engine);
        let trace = trace_for(&BubbleSort, "5,3,8,1,9");
        engine.load_trace(Arc::clone(&trace));
        engine.play();
        let _ = host.run_until_idle(&mut engine);

        let frames = frames.borrow();
        assert!(frames[0].active.is_none(), "load emits a reset frame");
        let played = &frames[1..];
        for pair in played.windows(2) {
            let a = (pair[0].position, pair[0].sub_frame);
            let b = (pair[1].position, pair[1].sub_frame);
            assert!(a < b, "{a:?} then {b:?}");
        }

        let completed: Vec<usize> = played
            .iter()
            .filter(|f| f.sub_frame == 0)
            .map(|f| f.position)
            .collect();
        assert_eq!(completed, (1..=trace.len()).collect::<Vec<_>>());

        let last = played.last().unwrap();
        assert_eq!(last.values, vec![1, 3, 5, 8, 9]);
        assert!(last.bars.iter().all(|b| b.role == BarRole::Sorted));
        assert_eq!(last.completion(), 1.0);
    }

    #[test]
    fn swap_bars_travel_between_slots() {
        let config = PlaybackConfig {
            interpolation_frames: 4,
            easing: EasingFunction::Linear,
            ..Default::default()
        };
        let (mut engine, host) = engine(config);
        let frames = record_frames(&mut engine);
        engine.load_trace(Arc::new(Trace::new(
            vec![2, 1],
            vec![
                Step::new(StepKind::Swap, vec![0, 1], "Swapping 2 and 1"),
                Step::new(StepKind::MarkSorted, vec![1], "2 is in place"),
                Step::new(StepKind::MarkSorted, vec![0], "1 is in place"),
            ],
        )));
        engine.play();
        let _ = host.run_until_idle(&mut engine);

        let frames = frames.borrow();
        // Reset, three in-flight sub-frames, swap done, two marks.
        assert_eq!(frames.len(), 7);

        let first = &frames[1];
        assert_eq!(first.values, vec![2, 1]);
        assert_eq!(first.bars[0].slot, 0.25);
        assert_eq!(first.bars[1].slot, 0.75);
        assert_eq!(first.bars[0].role, BarRole::Swapping);
        assert_eq!(first.active.as_ref().unwrap().progress, 0.25);

        let landed = &frames[4];
        assert_eq!((landed.position, landed.sub_frame), (1, 0));
        assert_eq!(landed.values, vec![1, 2]);
        assert_eq!(landed.bars[0].slot, 0.0);
        assert_eq!(landed.bars[1].slot, 1.0);

        assert_eq!(frames[5].bars[1].role, BarRole::Sorted);
        assert_eq!(frames[5].bars[0].role, BarRole::Idle);
    }

    #[test]
    fn reset_mid_play_replays_identical_frames() {
        let trace = trace_for(&QuickSort, "7,2,9,4,1,8");

        let (mut fresh, fresh_host) = engine(PlaybackConfig::default());
        let expected = record_frames(&mut fresh);
        fresh.load_trace(Arc::clone(&trace));
        fresh.play();
        let _ = fresh_host.run_until_idle(&mut fresh);

        let (mut engine, host) = engine(PlaybackConfig::default());
        let frames = record_frames(&mut engine);
        engine.load_trace(Arc::clone(&trace));
        engine.play();
        assert_eq!(host.run_ticks(&mut engine, 13), 13);
        assert!(engine.progress().0 > 0);

        frames.borrow_mut().clear();
        engine.reset();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(engine.progress().0, 0);
        assert!(host.scheduler().is_empty());

        engine.play();
        let _ = host.run_until_idle(&mut engine);
        assert_eq!(*frames.borrow(), *expected.borrow());
    }

    #[test]
    fn speed_changes_timing_not_steps() {
        let trace = trace_for(&BubbleSort, "9,4,7,1,3");

        let narrate = |engine: &mut PlaybackEngine| {
            let log = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&log);
            engine.on_step(move |n, text| {
                sink.borrow_mut().push((n, text.to_owned()));
            });
            log
        };

        let (mut steady, steady_host) = engine(PlaybackConfig::default());
        let expected = narrate(&mut steady);
        steady.load_trace(Arc::clone(&trace));
        steady.play();
        let steady_ticks = steady_host.run_until_idle(&mut steady);

        let (mut varied, host) = engine(PlaybackConfig::default());
        let seen = narrate(&mut varied);
        varied.load_trace(Arc::clone(&trace));
        varied.play();
        let mut ticks = host.run_ticks(&mut varied, 5);
        varied.set_speed(3.0);
        ticks += host.run_ticks(&mut varied, 20);
        varied.set_speed(0.5);
        ticks += host.run_ticks(&mut varied, 7);
        varied.set_speed(2.5);
        ticks += host.run_until_idle(&mut varied);

        assert_eq!(varied.run_state(), RunState::Completed);
        assert_eq!(*seen.borrow(), *expected.borrow());
        assert_eq!(seen.borrow().len(), trace.len());
        assert_eq!(seen.borrow()[0].0, 1);
        assert_ne!(ticks, steady_ticks);
    }

    #[test]
    fn faster_playback_takes_fewer_ticks() {
        let trace = trace_for(&BubbleSort, "3,2,1");
        let mut ticks = Vec::new();
        for speed in [0.5, 1.0, 3.0] {
            let (mut engine, host) = engine(PlaybackConfig::default());
            engine.set_speed(speed);
            engine.load_trace(Arc::clone(&trace));
            engine.play();
            ticks.push(host.run_until_idle(&mut engine));
        }
        assert!(ticks[0] > ticks[1] && ticks[1] > ticks[2], "{ticks:?}");
    }

    #[test]
    fn speed_is_clamped_and_non_finite_ignored() {
        let (mut engine, _host) = engine(PlaybackConfig::default());
        assert_eq!(engine.state().speed, 1.0);
        engine.set_speed(9.0);
        assert_eq!(engine.state().speed, 3.0);
        engine.set_speed(f32::NAN);
        assert_eq!(engine.state().speed, 3.0);
        engine.set_speed(f32::NEG_INFINITY);
        assert_eq!(engine.state().speed, 3.0);
        engine.set_speed(0.0);
        assert_eq!(engine.state().speed, 0.5);
    }

    #[test]
    fn pause_holds_position_and_interpolation() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        let frames = record_frames(&mut engine);
        engine.load_trace(trace_for(&BubbleSort, "4,3,2,1"));
        engine.play();
        assert_eq!(host.run_ticks(&mut engine, 3), 3);

        engine.pause();
        engine.pause();
        assert_eq!(engine.run_state(), RunState::Paused);
        assert!(host.scheduler().is_empty());
        let held = frames.borrow().last().cloned().unwrap();
        assert_eq!((held.position, held.sub_frame), (0, 3));

        engine.resume();
        assert_eq!(engine.run_state(), RunState::Playing);
        assert_eq!(host.run_ticks(&mut engine, 1), 1);
        let next = frames.borrow().last().cloned().unwrap();
        assert_eq!((next.position, next.sub_frame), (0, 4));
    }

    #[test]
    fn stale_timers_are_ignored() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        let frames = record_frames(&mut engine);
        let queue: TimerQueue = host.scheduler();
        engine.load_trace(trace_for(&BubbleSort, "2,1"));

        engine.play();
        let cancelled = queue.pop_next().unwrap();
        engine.pause();
        engine.on_timer(cancelled);
        assert_eq!(frames.borrow().len(), 1);

        engine.reset();
        engine.play();
        engine.on_timer(cancelled);
        assert_eq!(frames.borrow().len(), 2);
        assert_eq!(queue.len(), 1);
        assert_eq!(host.run_ticks(&mut engine, 1), 1);
        assert_eq!(frames.borrow().len(), 3);
    }

    #[test]
    fn delay_compensates_for_processing_time() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        let nominal = engine.config().nominal_interval();
        let clock = host.scheduler();
        let cost = Rc::new(Cell::new(Duration::ZERO));
        let charge = Rc::clone(&cost);
        engine.on_frame(move |_| {
            clock.advance(charge.get());
            Ok(())
        });
        engine.load_trace(trace_for(&BubbleSort, "5,4,3,2,1"));
        assert_eq!(engine.next_delay(), nominal);

        engine.play();
        cost.set(Duration::from_millis(5));
        let _ = host.run_ticks(&mut engine, 1);
        assert_eq!(engine.next_delay(), nominal - Duration::from_millis(5));

        cost.set(Duration::from_millis(40));
        let _ = host.run_ticks(&mut engine, 1);
        assert_eq!(engine.next_delay(), PlaybackConfig::MIN_DELAY);
    }

    #[test]
    fn failing_frame_callbacks_do_not_stop_playback() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        engine.on_frame(|_| Err("surface went away".into()));
        engine.on_frame(|frame| {
            assert!(frame.position < 2, "renderer bug");
            Ok(())
        });
        let frames = record_frames(&mut engine);
        let completions = count_completions(&mut engine);

        engine.load_trace(trace_for(&BubbleSort, "3,1,2"));
        engine.play();
        let _ = host.run_until_idle(&mut engine);

        assert_eq!(engine.run_state(), RunState::Completed);
        assert_eq!(completions.get(), 1);
        let last = frames.borrow().last().cloned().unwrap();
        assert_eq!(last.values, vec![1, 2, 3]);
    }

    #[test]
    fn panicking_step_and_completion_callbacks_are_contained() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        engine.on_step(|number, _| assert_ne!(number, 2, "narrator bug"));
        engine.on_complete(|| panic!("summary bug"));
        let completions = count_completions(&mut engine);

        engine.load_trace(trace_for(&BubbleSort, "3,1,2"));
        engine.play();
        let _ = host.run_until_idle(&mut engine);

        assert_eq!(engine.run_state(), RunState::Completed);
        let (position, total) = engine.progress();
        assert_eq!(position, total);
        assert_eq!(completions.get(), 1);
        assert!(host.scheduler().is_empty());
    }

    #[test]
    fn completion_fires_once_per_run() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        let completions = count_completions(&mut engine);
        engine.load_trace(trace_for(&BubbleSort, "2,1"));

        engine.play();
        let _ = host.run_until_idle(&mut engine);
        engine.play();
        engine.pause();
        let _ = host.run_until_idle(&mut engine);
        assert_eq!(completions.get(), 1);

        engine.reset();
        engine.play();
        let _ = host.run_until_idle(&mut engine);
        assert_eq!(completions.get(), 2);
    }

    #[test]
    fn loading_a_new_trace_resets() {
        let (mut engine, host) = engine(PlaybackConfig::default());
        let frames = record_frames(&mut engine);
        engine.load_trace(trace_for(&BubbleSort, "3,2,1"));
        engine.play();
        let _ = host.run_ticks(&mut engine, 10);

        engine.load_trace(trace_for(&BubbleSort, "9,8"));
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(engine.progress().0, 0);
        assert!(host.scheduler().is_empty());
        let reset = frames.borrow().last().cloned().unwrap();
        assert_eq!(reset.values, vec![9, 8]);
        assert!(reset.active.is_none());
        assert_eq!(engine.trace().map(|t| t.initial().len()), Some(2));
    }
}
