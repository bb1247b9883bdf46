//! Terminal session: size queries, raw mode, and guaranteed restoration.
//!
//! Restoration is guarded by a shared flag so it runs once no matter how
//! many exit paths (normal return, `Drop`, panic hook) reach it.

use std::env;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{cursor, style::ResetColor, terminal, QueueableCommand};
use log::{debug, info};

use crate::types::{Dimensions, DEFAULT_COLS, DEFAULT_ROWS};

/// Current terminal size.
///
/// Asks the tty first (one ioctl). When stdout is not a terminal or the
/// query fails, falls back to `COLUMNS`/`LINES`, then to 80x24.
pub fn query_size() -> Dimensions {
    if io::stdout().is_terminal() {
        if let Ok((cols, rows)) = terminal::size() {
            if cols > 0 && rows > 0 {
                return Dimensions::new(cols, rows);
            }
        }
    }
    size_from_env(
        env::var("COLUMNS").ok().as_deref(),
        env::var("LINES").ok().as_deref(),
    )
}

/// Size from `COLUMNS`/`LINES` values; missing, non-numeric or non-positive
/// values take the default for that axis.
pub fn size_from_env(cols: Option<&str>, rows: Option<&str>) -> Dimensions {
    fn axis(value: Option<&str>, default: u16) -> u16 {
        value
            .and_then(|v| v.trim().parse::<i64>().ok())
            .filter(|&n| n > 0)
            .map(|n| n.min(u16::MAX as i64) as u16)
            .unwrap_or(default)
    }
    Dimensions::new(axis(cols, DEFAULT_COLS), axis(rows, DEFAULT_ROWS))
}

/// Bytes that put the terminal back: default colors, the last frame wiped
/// to the default background, line wrap on, cursor parked on `final_row`
/// (1-based) and visible.
pub fn encode_restore_into(out: &mut Vec<u8>, final_row: u16) -> io::Result<()> {
    out.queue(ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, final_row.max(1) - 1))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    Ok(())
}

/// Shared "terminal needs restoring" flag.
#[derive(Debug, Clone, Default)]
pub struct RestoreGuard {
    armed: Arc<AtomicBool>,
}

impl RestoreGuard {
    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Disarm, returning whether this call was the one that did it.
    pub fn take(&self) -> bool {
        self.armed.swap(false, Ordering::SeqCst)
    }

    /// Write the restore sequence if still armed. Later calls write nothing
    /// and return `false`.
    pub fn restore_into<W: Write>(&self, out: &mut W, final_row: u16) -> io::Result<bool> {
        if !self.take() {
            return Ok(false);
        }
        write_restore(out, final_row)?;
        Ok(true)
    }
}

fn write_restore<W: Write>(out: &mut W, final_row: u16) -> io::Result<()> {
    let mut buf = Vec::with_capacity(32);
    encode_restore_into(&mut buf, final_row)?;
    out.write_all(&buf)?;
    out.flush()
}

/// An acquired terminal: raw mode on, cursor hidden, line wrap off.
///
/// Dropping the session restores the terminal.
pub struct Session {
    guard: RestoreGuard,
}

impl Session {
    /// Enter raw mode and hide the cursor.
    ///
    /// Fails without touching the screen if raw mode cannot be enabled.
    pub fn acquire() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let session = Self {
            guard: RestoreGuard::default(),
        };
        session.guard.arm();

        // From here on, an early return drops `session` and restores.
        let mut out = io::stdout();
        out.queue(cursor::Hide)?;
        out.queue(terminal::DisableLineWrap)?;
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.flush()?;

        info!("terminal session acquired");
        Ok(session)
    }

    pub fn guard(&self) -> RestoreGuard {
        self.guard.clone()
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if !self.guard.is_armed() {
            debug!("terminal already restored");
            return Ok(());
        }
        let rows = query_size().rows;
        self.restore_to(&mut io::stdout(), rows)
    }

    /// Restore through `out`, parking the cursor on `final_row`. Only the
    /// first call writes anything or leaves raw mode.
    pub fn restore_to<W: Write>(&mut self, out: &mut W, final_row: u16) -> Result<()> {
        if restore_tty(&self.guard, out, final_row)? {
            info!("terminal restored");
        } else {
            debug!("terminal already restored");
        }
        Ok(())
    }

    /// Restore the terminal before the default panic output is printed.
    pub fn install_panic_hook(&self) {
        let guard = self.guard();
        let prev = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_tty(&guard, &mut io::stdout(), query_size().rows);
            prev(info);
        }));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Write the restore sequence and leave raw mode, if `guard` is still armed.
fn restore_tty<W: Write>(guard: &RestoreGuard, out: &mut W, final_row: u16) -> Result<bool> {
    let written = match guard.restore_into(out, final_row) {
        Ok(false) => return Ok(false),
        Ok(true) => Ok(()),
        Err(err) => Err(err),
    };
    // Raw mode goes even when the write failed.
    let raw = terminal::disable_raw_mode();
    written.context("failed to write terminal restore sequence")?;
    raw.context("failed to disable raw mode")?;
    Ok(true)
}
