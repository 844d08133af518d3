//! Playback control errors

use thiserror::Error;

/// Misuse of the [`Scheduler`](super::Scheduler) API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// `play` was called while another trace is still playing
    #[error("a trace is already playing; cancel or reset it first")]
    AlreadyPlaying,

    /// The trace has nothing to show
    ///
    /// Producers always end a trace with a terminal step, so this only
    /// guards against a trace built by hand without one.
    #[error("cannot play an empty trace")]
    EmptyTrace,
}
