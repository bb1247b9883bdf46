//! Terminal input module.
//!
//! Maps `crossterm` key events to the few things an animation cares about
//! (quit, resize) and drains pending input without ever blocking.

pub mod map;
pub mod poll;

pub use dote_types as types;

pub use map::{classify, should_quit, Signal};
pub use poll::{drain_pending, Pending};
