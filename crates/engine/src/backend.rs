//! Where frames go and where sizes, keys and signals come from.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::input::{drain_pending, Pending};
use crate::signals::SignalFlags;
use crate::term::{query_size, FrameBuffer, Session, TerminalRenderer};
use crate::types::Dimensions;

/// Longest uninterrupted nap inside [`TtyBackend::sleep`].
const SLEEP_SLICE: Duration = Duration::from_millis(10);

pub trait Backend {
    /// Terminal size for this tick.
    fn size(&mut self) -> Dimensions;

    /// Render a frame. The buffer is swapped with the previous frame, so its
    /// contents are stale on return.
    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()>;

    /// Make the next [`Backend::present`] a full redraw.
    fn invalidate(&mut self);

    /// Drain pending input without blocking.
    fn poll(&mut self) -> Result<Pending>;

    fn shutdown_requested(&self) -> bool;

    /// The one suspension point of a tick.
    fn sleep(&mut self, delay: Duration);

    /// Put the terminal back. Called once the loop is done, on every exit.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Last known terminal size. Queried once, then again only after a resize
/// notification.
#[derive(Debug, Clone, Copy, Default)]
struct SizeCache {
    size: Option<Dimensions>,
}

impl SizeCache {
    fn get(&mut self, query: impl FnOnce() -> Dimensions) -> Dimensions {
        *self.size.get_or_insert_with(query)
    }

    fn mark_stale(&mut self) {
        self.size = None;
    }
}

/// A real terminal.
pub struct TtyBackend {
    session: Session,
    renderer: TerminalRenderer,
    signals: SignalFlags,
    size: SizeCache,
}

impl TtyBackend {
    pub fn new(session: Session, signals: SignalFlags) -> Self {
        Self {
            session,
            renderer: TerminalRenderer::new(),
            signals,
            size: SizeCache::default(),
        }
    }
}

impl Backend for TtyBackend {
    fn size(&mut self) -> Dimensions {
        // SIGWINCH during the last sleep; `poll` consumes it later.
        if self.signals.resize_pending() {
            self.size.mark_stale();
        }
        self.size.get(query_size)
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.renderer.draw_swap(fb)?;
        Ok(())
    }

    fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    fn poll(&mut self) -> Result<Pending> {
        let mut pending = drain_pending()?;
        pending.resized |= self.signals.take_resized();
        if pending.resized {
            self.size.mark_stale();
        }
        Ok(pending)
    }

    fn shutdown_requested(&self) -> bool {
        self.signals.shutdown_requested()
    }

    /// Sleep in short slices so a shutdown signal cuts the wait short.
    fn sleep(&mut self, delay: Duration) {
        let deadline = Instant::now() + delay;
        loop {
            if self.signals.shutdown_requested() {
                return;
            }
            let left = deadline.saturating_duration_since(Instant::now());
            if left.is_zero() {
                return;
            }
            thread::sleep(left.min(SLEEP_SLICE));
        }
    }

    fn finish(&mut self) -> Result<()> {
        self.session.restore()
    }
}

/// Scripted stand-in for a terminal.
///
/// Sizes are replayed one per tick (the last one repeats), frames are kept
/// as snapshots, escape output goes to an in-memory renderer, and sleeps
/// only add up the time that would have passed.
pub struct HeadlessBackend {
    sizes: VecDeque<Dimensions>,
    current: Dimensions,
    queried: bool,
    renderer: TerminalRenderer<Vec<u8>>,
    frames: Vec<FrameBuffer>,
    presented: usize,
    record: bool,
    quit_after: Option<usize>,
    shutdown_after: Option<usize>,
    signals: SignalFlags,
    slept: Duration,
    sleeps: usize,
    finished: usize,
}

impl HeadlessBackend {
    pub fn new(size: Dimensions) -> Self {
        Self {
            sizes: VecDeque::new(),
            current: size,
            queried: false,
            renderer: TerminalRenderer::with_writer(Vec::new()),
            frames: Vec::new(),
            presented: 0,
            record: true,
            quit_after: None,
            shutdown_after: None,
            signals: SignalFlags::new(),
            slept: Duration::ZERO,
            sleeps: 0,
            finished: 0,
        }
    }

    /// Sizes returned by the [`Backend::size`] calls that follow the first
    /// one, which always reports the initial size.
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = Dimensions>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    /// Report a quit key once `frames` frames have been presented.
    pub fn quit_after(mut self, frames: usize) -> Self {
        self.quit_after = Some(frames);
        self
    }

    /// Raise the shutdown flag once `frames` frames have been presented.
    pub fn shutdown_after(mut self, frames: usize) -> Self {
        self.shutdown_after = Some(frames);
        self
    }

    /// Share flags with real signal handlers instead of private ones.
    pub fn with_signals(mut self, signals: SignalFlags) -> Self {
        self.signals = signals;
        self
    }

    /// Stop keeping frame snapshots; only counts and escape output remain.
    pub fn without_recording(mut self) -> Self {
        self.record = false;
        self
    }

    pub fn signals(&self) -> SignalFlags {
        self.signals.clone()
    }

    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Escape output written so far.
    pub fn output(&self) -> &[u8] {
        self.renderer.writer()
    }

    pub fn slept(&self) -> Duration {
        self.slept
    }

    pub fn sleeps(&self) -> usize {
        self.sleeps
    }

    /// How many times [`Backend::finish`] ran.
    pub fn finished(&self) -> usize {
        self.finished
    }
}

impl Backend for HeadlessBackend {
    fn size(&mut self) -> Dimensions {
        if self.queried {
            if let Some(next) = self.sizes.pop_front() {
                self.current = next;
            }
        }
        self.queried = true;
        self.current
    }

    fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        if self.record {
            self.frames.push(fb.clone());
        }
        self.renderer.draw_swap(fb)?;
        self.presented += 1;
        if self.shutdown_after == Some(self.presented) {
            self.signals.request_shutdown();
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    fn poll(&mut self) -> Result<Pending> {
        Ok(Pending {
            quit: self.quit_after.is_some_and(|n| self.presented >= n),
            resized: self.signals.take_resized(),
        })
    }

    fn shutdown_requested(&self) -> bool {
        self.signals.shutdown_requested()
    }

    fn sleep(&mut self, delay: Duration) {
        self.slept += delay;
        self.sleeps += 1;
    }

    fn finish(&mut self) -> Result<()> {
        self.finished += 1;
        Ok(())
    }
}
