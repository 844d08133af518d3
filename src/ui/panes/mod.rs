//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over the exposed step.
//!
//! # Pane Modules
//!
//! - [`containers`]: the step's containers, laid out per trace shape, with pointer labels
//! - [`pseudocode`]: the producer's listing with the current line highlighted
//! - [`ranges`]: merge-sort split tree
//! - [`status`]: status bar with keybindings and playback state

pub mod containers;
pub mod pseudocode;
pub mod ranges;
pub mod status;

pub use containers::render_containers_pane;
pub use pseudocode::render_pseudocode_pane;
pub use ranges::render_ranges_pane;
pub use status::{render_status_bar, StatusRenderData};
