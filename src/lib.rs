//! dote (workspace facade crate).
//!
//! Terminal screensaver animations. This package re-exports the member
//! crates under `crates/` as `dote::{core,engine,input,term,types}` and
//! holds the command-line front end.

pub mod cli;

pub use dote_core as core;
pub use dote_engine as engine;
pub use dote_input as input;
pub use dote_term as term;
pub use dote_types as types;
