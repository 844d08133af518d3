//! # Introduction
//!
//! algoviz runs classic algorithms on small inputs while recording every
//! interesting moment as an immutable [`trace::Step`]. The finished
//! [`trace::Trace`] is then played back one step per tick, next to the
//! algorithm's pseudocode with the executing line highlighted, in a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Operation → Producer → Trace → Scheduler → TUI / headless printer
//! ```
//!
//! 1. [`producers`]: one pure function per operation (searches, sorts,
//!    stack/queue, linked lists, tree and graph traversals, strings); each
//!    returns a complete trace and never fails, bad operands end the trace
//!    with an `InvalidArgument` outcome.
//! 2. [`trace`]: the step/trace model and the append-only
//!    [`trace::TraceBuilder`] the producers record into.
//! 3. [`scheduler`]: timed playback with play, cancel and reset, driven by
//!    the caller's event loop.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use algoviz::producers::linear_search;
//! use algoviz::trace::Outcome;
//!
//! let trace = linear_search(&[15, 8, 23, 4, 42, 16, 9], 23);
//! assert_eq!(trace.len(), 3);
//! assert_eq!(trace.outcome(), Some(Outcome::Found(2)));
//! ```

pub mod producers;
pub mod scheduler;
pub mod trace;
pub mod ui;
