//! Process signal flags.
//!
//! Handlers only flip atomics; the driver looks at them at its next
//! checkpoint and does all restoration from normal code. Repeated shutdown
//! signals just set the flag again, so every signal exit restores the
//! terminal and exits 0.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use log::debug;

#[derive(Debug, Clone, Default)]
pub struct SignalFlags {
    shutdown: Arc<AtomicBool>,
    resized: Arc<AtomicBool>,
}

impl SignalFlags {
    /// Flags with no handlers attached. Tests and headless runs set them by
    /// hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach handlers: SIGINT, SIGTERM and SIGHUP request shutdown, SIGWINCH
    /// marks a resize.
    #[cfg(unix)]
    pub fn register() -> Result<Self> {
        use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM, SIGWINCH};
        use signal_hook::flag;

        let flags = Self::new();
        for sig in [SIGINT, SIGTERM, SIGHUP] {
            flag::register(sig, Arc::clone(&flags.shutdown))?;
        }
        flag::register(SIGWINCH, Arc::clone(&flags.resized))?;
        debug!("signal handlers registered");
        Ok(flags)
    }

    #[cfg(not(unix))]
    pub fn register() -> Result<Self> {
        Ok(Self::new())
    }

    pub fn shutdown_requested(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    pub fn request_shutdown(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Peek at the resize notification without consuming it.
    pub fn resize_pending(&self) -> bool {
        self.resized.load(Ordering::SeqCst)
    }

    /// Consume a pending resize notification.
    pub fn take_resized(&self) -> bool {
        self.resized.swap(false, Ordering::SeqCst)
    }

    pub fn mark_resized(&self) {
        self.resized.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_shared_between_clones() {
        let flags = SignalFlags::new();
        let handle = flags.clone();
        assert!(!flags.shutdown_requested());
        handle.request_shutdown();
        assert!(flags.shutdown_requested());
    }

    #[test]
    fn resize_is_consumed_once() {
        let flags = SignalFlags::new();
        flags.mark_resized();
        assert!(flags.resize_pending());
        assert!(flags.take_resized());
        assert!(!flags.resize_pending());
        assert!(!flags.take_resized());
    }
}
