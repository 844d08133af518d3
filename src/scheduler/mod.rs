//! Timed playback of traces
//!
//! The [`Scheduler`] takes a finished [`Trace`] and exposes its steps one at a
//! time. It never owns a thread or a timer: the caller's event loop asks
//! [`Scheduler::time_until_next_tick`] how long it may block and then calls
//! [`Scheduler::tick`], which advances by at most one step. Headless callers
//! use [`Scheduler::run_blocking`] instead.
//!
//! # States
//!
//! ```text
//! Idle --play--> Playing --terminal step / cancel / reset--> Idle
//! ```
//!
//! Only one trace plays at a time; `play` while playing is rejected with
//! [`SchedulerError::AlreadyPlaying`]. After a cancel the last exposed step
//! stays on screen with its pointers and code highlight cleared; after a
//! natural finish the terminal step stays exactly as emitted.

pub mod errors;

pub use errors::SchedulerError;

use crate::trace::{Step, Trace};
use std::fmt;
use std::time::{Duration, Instant};

/// Delay between two exposed steps unless configured otherwise
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(800);

/// Shortest delay between two steps; shorter delays are raised to this
pub const MIN_TICK_DELAY: Duration = Duration::from_millis(50);

/// Message shown before anything has been played
pub const IDLE_MESSAGE: &str = "Select an operation to begin.";

/// Playback settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub tick_delay: Duration,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            tick_delay: DEFAULT_TICK_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackState::Idle => write!(f, "IDLE"),
            PlaybackState::Playing => write!(f, "PLAYING"),
        }
    }
}

/// Invoked once with the terminal step when a playback finishes on its own
pub type CompletionCallback = Box<dyn FnMut(&Step)>;

/// Plays one trace at a time
pub struct Scheduler {
    /// The trace being played, `None` when idle
    trace: Option<Trace>,
    /// Index of the exposed step inside `trace`
    position: usize,
    tick_delay: Duration,
    /// When the exposed step went on screen
    exposed_at: Instant,
    /// What the view shows; survives the end of playback
    displayed: Step,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("state", &self.state())
            .field("position", &self.position)
            .field("tick_delay", &self.tick_delay)
            .field("displayed", &self.displayed.message)
            .finish_non_exhaustive()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler::new(PlaybackConfig::default())
    }
}

impl Scheduler {
    pub fn new(config: PlaybackConfig) -> Self {
        Scheduler {
            trace: None,
            position: 0,
            tick_delay: config.tick_delay.max(MIN_TICK_DELAY),
            exposed_at: Instant::now(),
            displayed: Step::idle(IDLE_MESSAGE),
            on_complete: None,
        }
    }

    /// Register the completion callback
    pub fn with_on_complete(mut self, callback: CompletionCallback) -> Self {
        self.on_complete = Some(callback);
        self
    }

    pub fn set_on_complete(&mut self, callback: CompletionCallback) {
        self.on_complete = Some(callback);
    }

    pub fn state(&self) -> PlaybackState {
        if self.trace.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.trace.is_some()
    }

    /// The step the view should render
    pub fn current(&self) -> &Step {
        &self.displayed
    }

    /// `(index of exposed step, trace length)` while playing
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.trace.as_ref().map(|t| (self.position, t.len()))
    }

    pub fn tick_delay(&self) -> Duration {
        self.tick_delay
    }

    /// Change the delay, also for a playback already running
    pub fn set_tick_delay(&mut self, delay: Duration) {
        self.tick_delay = delay.max(MIN_TICK_DELAY);
    }

    /// Start playing `trace` now
    pub fn play(&mut self, trace: Trace, tick_delay: Duration) -> Result<(), SchedulerError> {
        self.play_at(trace, tick_delay, Instant::now())
    }

    /// Start playing `trace` as if the clock read `now`
    pub fn play_at(
        &mut self,
        trace: Trace,
        tick_delay: Duration,
        now: Instant,
    ) -> Result<(), SchedulerError> {
        if self.is_playing() {
            return Err(SchedulerError::AlreadyPlaying);
        }
        if let Err(e) = trace.validate() {
            log::debug!("{}: playing a malformed trace: {}", trace.listing().title, e);
        }
        let first = trace.first().cloned().ok_or(SchedulerError::EmptyTrace)?;

        log::debug!(
            "play {} ({} steps, {:?} per step)",
            trace.listing().title,
            trace.len(),
            tick_delay
        );
        self.set_tick_delay(tick_delay);
        self.position = 0;
        self.exposed_at = now;
        self.displayed = first;
        self.trace = Some(trace);

        if self.displayed.is_terminal() {
            self.complete();
        }
        Ok(())
    }

    /// Advance by at most one step if the delay has elapsed
    ///
    /// Returns true when a new step was exposed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(trace) = &self.trace else {
            return false;
        };
        if now.saturating_duration_since(self.exposed_at) < self.tick_delay {
            return false;
        }
        let Some(next) = trace.get(self.position + 1) else {
            // a trace always ends in a terminal step, which completes playback
            self.trace = None;
            return false;
        };

        self.position += 1;
        self.displayed = next.clone();
        self.exposed_at = now;
        log::trace!(
            "step {}/{}: {}",
            self.position + 1,
            trace.len(),
            self.displayed.message
        );

        if self.displayed.is_terminal() {
            self.complete();
        }
        true
    }

    /// How long the caller may wait before the next tick is due
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.trace.as_ref().map(|_| {
            self.tick_delay
                .saturating_sub(now.saturating_duration_since(self.exposed_at))
        })
    }

    /// Stop playback, keeping the last exposed step without highlights
    pub fn cancel(&mut self) {
        if self.trace.take().is_some() {
            log::debug!("cancelled at step {}", self.position + 1);
            self.displayed = self.displayed.without_highlights();
        }
    }

    /// Cancel and show `idle_message` with no highlights
    pub fn reset(&mut self, idle_message: impl Into<String>) {
        self.cancel();
        let mut idle = self.displayed.without_highlights();
        idle.message = idle_message.into();
        self.displayed = idle;
        self.position = 0;
        log::debug!("reset: {}", self.displayed.message);
    }

    /// Display `step` while idle, e.g. the untouched input before a first play
    ///
    /// Ignored while a trace is playing.
    pub fn show(&mut self, step: Step) {
        if !self.is_playing() {
            self.displayed = step;
        }
    }

    /// Play a whole trace on the calling thread, sleeping between steps
    ///
    /// `on_step` sees every exposed step in order, the terminal one included.
    pub fn run_blocking(
        &mut self,
        trace: Trace,
        tick_delay: Duration,
        mut on_step: impl FnMut(&Step),
    ) -> Result<(), SchedulerError> {
        self.play(trace, tick_delay)?;
        on_step(self.current());

        while let Some(wait) = self.time_until_next_tick(Instant::now()) {
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
            if self.tick() {
                on_step(self.current());
            }
        }
        Ok(())
    }

    fn complete(&mut self) {
        self.trace = None;
        log::debug!(
            "playback finished: {}",
            self.displayed
                .outcome
                .map(|o| o.to_string())
                .unwrap_or_default()
        );
        if let Some(callback) = self.on_complete.as_mut() {
            callback(&self.displayed);
        }
    }
}
