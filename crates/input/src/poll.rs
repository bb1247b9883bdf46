//! Non-blocking input polling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event;

use crate::map::{classify, Signal};

/// Signals gathered from everything that was pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pending {
    pub quit: bool,
    pub resized: bool,
}

impl Pending {
    pub fn record(&mut self, signal: Signal) {
        match signal {
            Signal::Quit => self.quit = true,
            Signal::Resize => self.resized = true,
        }
    }
}

/// Read every event that is already queued and return immediately.
pub fn drain_pending() -> Result<Pending> {
    let mut pending = Pending::default();
    while event::poll(Duration::ZERO)? {
        if let Some(signal) = classify(&event::read()?) {
            pending.record(signal);
        }
    }
    Ok(pending)
}
