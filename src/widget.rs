//! The out-of-process now-playing widget.
//!
//! Pull-only: every render pass reads the shared status slot and draws
//! exactly what it got, with no caching across passes and no merging with
//! prior reads. Key presses go back through the command relay and the display
//! catches up on a later pass; lagging the real transport by one refresh
//! cycle is expected.

mod tui;
mod view;

pub use tui::run;
pub use view::{WidgetView, scrub_target, toggle_command};

#[cfg(test)]
mod tests;
