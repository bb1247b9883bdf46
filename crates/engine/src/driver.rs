//! Main loop state machine.
//!
//! `Starting → Running → Draining → Stopped`. Every way out of `Running`
//! (finished passes, quit key, shutdown signal, I/O error) goes through
//! `Draining`, which asks the backend to restore the terminal.

use anyhow::Result;
use log::{debug, info};

use crate::animation::{animation_for, Animation, Progress};
use crate::backend::Backend;
use crate::config::RunConfig;
use crate::term::FrameBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Starting,
    Running,
    Draining,
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    PassesComplete,
    QuitKey,
    Signal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Passes completed.
    pub passes: u32,
    /// Frames rendered.
    pub ticks: u64,
    pub reason: ExitReason,
}

pub struct Driver {
    config: RunConfig,
    state: DriverState,
    ticks: u64,
    passes: u32,
}

impl Driver {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            state: DriverState::Starting,
            ticks: 0,
            passes: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run until a termination condition, then restore through the backend.
    ///
    /// The backend is finished even when the loop fails; a loop error wins
    /// over a restore error.
    pub fn run<B: Backend>(&mut self, backend: &mut B) -> Result<RunOutcome> {
        let result = self.run_loop(backend);

        self.state = DriverState::Draining;
        let finished = backend.finish();
        self.state = DriverState::Stopped;

        let outcome = result?;
        finished?;
        info!(
            "stopped: {:?} after {} passes, {} frames",
            outcome.reason, outcome.passes, outcome.ticks
        );
        Ok(outcome)
    }

    fn run_loop<B: Backend>(&mut self, backend: &mut B) -> Result<RunOutcome> {
        let mode = self.config.mode.address_mode();
        let dims = backend.size();
        let mut fb = FrameBuffer::for_terminal(dims, mode);
        let mut animation = animation_for(&self.config, fb.width(), fb.height());
        info!(
            "starting {} on {}x{} ({}x{} grid), {} passes",
            self.config.mode.as_str(),
            dims.cols,
            dims.rows,
            fb.width(),
            fb.height(),
            self.config.passes
        );
        self.state = DriverState::Running;

        loop {
            if let Some(reason) = self.tick(backend, &mut fb, animation.as_mut())? {
                return Ok(self.outcome(reason));
            }
        }
    }

    /// One tick. Returns the exit reason once the loop should stop.
    fn tick<B: Backend>(
        &mut self,
        backend: &mut B,
        fb: &mut FrameBuffer,
        animation: &mut dyn Animation,
    ) -> Result<Option<ExitReason>> {
        if backend.shutdown_requested() {
            info!("shutdown requested by signal");
            return Ok(Some(ExitReason::Signal));
        }

        let dims = backend.size();
        let (old_w, old_h) = (fb.width(), fb.height());
        if fb.fit_terminal(dims) {
            info!(
                "resized: {}x{} -> {}x{} grid",
                old_w,
                old_h,
                fb.width(),
                fb.height()
            );
            animation.resize(fb.width(), fb.height());
            backend.invalidate();
        }

        if animation.update(self.ticks) == Progress::PassComplete {
            self.passes += 1;
            info!("pass {} complete", self.passes);
            if self.config.is_done(self.passes) {
                return Ok(Some(ExitReason::PassesComplete));
            }
        }

        fb.clear(animation.background());
        animation.compose(self.ticks, fb);
        backend.present(fb)?;
        self.ticks += 1;

        let pending = backend.poll()?;
        if pending.quit {
            info!("quit key");
            return Ok(Some(ExitReason::QuitKey));
        }
        if pending.resized {
            debug!("resize notification");
            backend.invalidate();
        }

        if backend.shutdown_requested() {
            info!("shutdown requested by signal");
            return Ok(Some(ExitReason::Signal));
        }
        backend.sleep(self.config.delay);
        Ok(None)
    }

    fn outcome(&self, reason: ExitReason) -> RunOutcome {
        RunOutcome {
            passes: self.passes,
            ticks: self.ticks,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::backend::HeadlessBackend;
    use crate::core::assets::LOCOMOTIVE;
    use crate::types::{Dimensions, Mode};

    fn runner(passes: u32) -> RunConfig {
        RunConfig {
            mode: Mode::Runner,
            passes,
            delay: Duration::from_millis(5),
            ..RunConfig::default()
        }
    }

    #[test]
    fn finite_passes_render_whole_traversals() {
        let mut backend = HeadlessBackend::new(Dimensions::new(40, 16)).without_recording();
        let mut driver = Driver::new(runner(3));
        assert_eq!(driver.state(), DriverState::Starting);

        let outcome = driver.run(&mut backend).unwrap();
        let pass_len = 40 + LOCOMOTIVE.width() as u64;
        assert_eq!(outcome.reason, ExitReason::PassesComplete);
        assert_eq!(outcome.passes, 3);
        assert_eq!(outcome.ticks, 3 * pass_len);
        assert_eq!(backend.presented() as u64, 3 * pass_len);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(backend.finished(), 1);
    }

    #[test]
    fn every_rendered_tick_sleeps_the_delay() {
        let mut backend = HeadlessBackend::new(Dimensions::new(40, 16)).without_recording();
        let outcome = Driver::new(runner(1)).run(&mut backend).unwrap();
        assert_eq!(backend.sleeps() as u64, outcome.ticks);
        assert_eq!(
            backend.slept(),
            Duration::from_millis(5) * outcome.ticks as u32
        );
    }

    #[test]
    fn endless_run_stops_on_quit_key() {
        let mut backend = HeadlessBackend::new(Dimensions::new(40, 16))
            .without_recording()
            .quit_after(500);
        let outcome = Driver::new(runner(0)).run(&mut backend).unwrap();
        assert_eq!(outcome.reason, ExitReason::QuitKey);
        assert_eq!(outcome.ticks, 500);
        assert!(outcome.passes >= 1);
        assert_eq!(backend.finished(), 1);
    }

    #[test]
    fn shutdown_flag_stops_before_sleeping() {
        let mut backend = HeadlessBackend::new(Dimensions::new(40, 16))
            .without_recording()
            .shutdown_after(7);
        let outcome = Driver::new(runner(0)).run(&mut backend).unwrap();
        assert_eq!(outcome.reason, ExitReason::Signal);
        assert_eq!(outcome.ticks, 7);
        assert_eq!(backend.sleeps(), 6);
    }

    #[test]
    fn pending_signal_prevents_any_frame() {
        let mut backend = HeadlessBackend::new(Dimensions::new(40, 16));
        backend.signals().request_shutdown();
        let outcome = Driver::new(runner(0)).run(&mut backend).unwrap();
        assert_eq!(outcome.reason, ExitReason::Signal);
        assert_eq!(outcome.ticks, 0);
        assert!(backend.frames().is_empty());
        assert_eq!(backend.finished(), 1);
    }

    #[test]
    fn resize_reallocates_before_next_frame() {
        let mut backend = HeadlessBackend::new(Dimensions::new(40, 16))
            .with_sizes([Dimensions::new(40, 16), Dimensions::new(60, 20)])
            .quit_after(3);
        Driver::new(runner(0)).run(&mut backend).unwrap();
        let shapes: Vec<_> = backend
            .frames()
            .iter()
            .map(|f| (f.width(), f.height()))
            .collect();
        assert_eq!(shapes, vec![(40, 16), (60, 20), (60, 20)]);
    }
}
