//! Run configuration.

use std::time::Duration;

use crate::types::{Direction, Mode, DEFAULT_DELAY_MS, DEFAULT_PASSES};

/// Everything the driver needs to know about one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: Mode,
    /// Sleep between ticks.
    pub delay: Duration,
    /// Passes before exiting; 0 runs until quit or signal.
    pub passes: u32,
    /// Requested 1-based anchor row. Out-of-range rows fall back to centered.
    pub row: Option<i32>,
    pub direction: Direction,
    pub seed: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            passes: DEFAULT_PASSES,
            row: None,
            direction: Direction::default(),
            seed: 1,
        }
    }
}

impl RunConfig {
    pub fn is_endless(&self) -> bool {
        self.passes == 0
    }

    /// `true` once `completed` passes satisfy the configured count.
    pub fn is_done(&self, completed: u32) -> bool {
        !self.is_endless() && completed >= self.passes
    }
}
