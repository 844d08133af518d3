//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, playback commands
//! - **[`panes`]**: stateless render functions for each visible pane (data,
//!   pseudocode, split tree, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`Operation`] and call [`App::run`] to start the event loop. The app never
//! advances steps itself; it polls for keys with a timeout taken from the
//! [`Scheduler`] and lets the scheduler decide when the next step is due.
//!
//! [`Operation`]: crate::producers::Operation
//! [`Scheduler`]: crate::scheduler::Scheduler
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
