//! Main loop driver.
//!
//! Ties the pieces together: a [`Driver`] owns the frame buffer and an
//! [`Animation`], and talks to the outside world only through a [`Backend`].
//! The real backend drives a terminal; the headless one replays scripted
//! sizes and records frames so the loop can be tested without a tty.
//!
//! Each tick runs in a fixed order: size check, update, clear, compose,
//! render, input poll, sleep.

pub mod animation;
pub mod backend;
pub mod config;
pub mod driver;
pub mod signals;

pub use dote_core as core;
pub use dote_input as input;
pub use dote_term as term;
pub use dote_types as types;

pub use animation::{
    animation_for, Animation, MeteorAnimation, Progress, RunnerAnimation, TourAnimation,
};
pub use backend::{Backend, HeadlessBackend, TtyBackend};
pub use config::RunConfig;
pub use driver::{Driver, DriverState, ExitReason, RunOutcome};
pub use signals::SignalFlags;
