//! Terminal rendering layer.
//!
//! This is a small, animation-oriented rendering layer. Frames are composed
//! into a simple framebuffer and flushed to the terminal as ANSI escape
//! sequences by a diffing renderer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep escape-sequence output to a minimum (it is the bottleneck)
//! - Support a 2-columns-per-pixel "dot" mode for square pixels

pub mod compositor;
pub mod fb;
pub mod renderer;
pub mod session;

pub use dote_core as core;
pub use dote_types as types;

pub use compositor::{blit, compose, draw_meteors, draw_stars, tile_backdrop};
pub use fb::{grid_size, Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use session::{encode_restore_into, query_size, size_from_env, RestoreGuard, Session};
