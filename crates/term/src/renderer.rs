//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Output volume is the bottleneck, so both encoders emit a color escape only
//! when a cell's color differs from the previously emitted cell, and every
//! row that was touched ends with a full reset.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer};
use crate::types::{AddressMode, Color};

/// Two spaces: one dot-mode pixel.
const DOT: &str = "  ";

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers should keep one `FrameBuffer` and pass it in every frame.
    /// The renderer will diff against the previous frame and then swap buffers
    /// so the caller can reuse the old one without cloning.
    ///
    /// Returns the number of bytes written.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<usize> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if same_shape(&prev, fb) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                match stale {
                    Some(mut prev) if prev.mode() == fb.mode() => {
                        prev.resize(fb.width(), fb.height());
                        prev
                    }
                    _ => FrameBuffer::new(fb.width(), fb.height(), fb.mode()),
                }
            }
        };
        self.flush_buf()?;

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(self.buf.len())
    }

    /// The writer frames are flushed to.
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

fn same_shape(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height() && a.mode() == b.mode()
}

/// Encode a full-frame redraw into `out`.
///
/// The screen is cleared first. In character mode blank cells are then
/// skipped entirely, since the clear already produced them.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let skip_blank = fb.mode() == AddressMode::Char;
    for y in 0..fb.height() {
        let mut current = Color::Default;
        let mut cursor_at: Option<u16> = None;
        let mut touched = false;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if skip_blank && cell == Cell::BLANK {
                continue;
            }
            if cursor_at != Some(x) {
                out.queue(cursor::MoveTo(x * fb.mode().cell_width(), y))?;
            }
            put_cell(out, fb.mode(), cell, &mut current)?;
            cursor_at = Some(x + 1);
            touched = true;
        }
        if touched {
            out.queue(ResetColor)?;
        }
    }
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !same_shape(prev, next) {
        return encode_full_into(next, out);
    }

    let cw = next.mode().cell_width();
    for y in 0..next.height() {
        let mut current = Color::Default;
        let mut touched = false;
        for_each_changed_run(prev, next, y, |x, len| {
            out.queue(cursor::MoveTo(x * cw, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                put_cell(out, next.mode(), cell, &mut current)?;
            }
            touched = true;
            Ok(())
        })?;
        if touched {
            out.queue(ResetColor)?;
        }
    }
    Ok(())
}

fn put_cell(out: &mut Vec<u8>, mode: AddressMode, cell: Cell, current: &mut Color) -> Result<()> {
    if *current != cell.color {
        match mode {
            AddressMode::Char => out.queue(SetForegroundColor(to_crossterm(cell.color)))?,
            AddressMode::Dot => out.queue(SetBackgroundColor(to_crossterm(cell.color)))?,
        };
        *current = cell.color;
    }
    match mode {
        AddressMode::Char => out.queue(Print(cell.ch))?,
        AddressMode::Dot => out.queue(Print(DOT))?,
    };
    Ok(())
}

pub(crate) fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Indexed(n) => style::Color::AnsiValue(n),
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    y: u16,
    mut f: impl FnMut(u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let mut x = 0;
    while x < w {
        let a = prev.get(x, y).unwrap_or_default();
        let b = next.get(x, y).unwrap_or_default();
        if a == b {
            x += 1;
            continue;
        }

        let start = x;
        x += 1;
        while x < w {
            let a2 = prev.get(x, y).unwrap_or_default();
            let b2 = next.get(x, y).unwrap_or_default();
            if a2 == b2 {
                break;
            }
            x += 1;
        }
        f(start, x - start)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::palette;

    fn text(bytes: &[u8]) -> String {
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(5, 1, AddressMode::Char);
        let mut b = FrameBuffer::new(5, 1, AddressMode::Char);

        // Change cells [1..=3] into X.
        for x in 1..=3 {
            b.set(x, 0, Cell::glyph('X', Color::Default));
        }

        let mut runs = Vec::new();
        for_each_changed_run(&a, &b, 0, |x, len| {
            runs.push((x, len));
            Ok(())
        })
        .unwrap();
        assert_eq!(runs, vec![(1, 3)]);
    }

    #[test]
    fn color_is_emitted_once_per_run_of_equal_cells() {
        let mut fb = FrameBuffer::new(4, 1, AddressMode::Dot);
        fb.clear(Cell::dot(palette::RED));
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let s = text(&out);
        assert_eq!(s.matches("\x1b[48;5;9m").count(), 1);
        assert!(s.contains("\x1b[48;5;9m        \x1b[0m"), "{s:?}");
    }

    #[test]
    fn char_mode_full_redraw_skips_blank_cells() {
        let mut fb = FrameBuffer::new(6, 2, AddressMode::Char);
        fb.set(4, 1, Cell::glyph('o', palette::GRAY));
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let s = text(&out);
        assert!(s.ends_with("\x1b[2;5H\x1b[38;5;8mo\x1b[0m"), "{s:?}");
    }

    #[test]
    fn identical_frames_produce_no_diff() {
        let mut a = FrameBuffer::new(8, 3, AddressMode::Dot);
        a.clear(Cell::dot(palette::NIGHT_SKY));
        let b = a.clone();
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn diff_moves_to_dot_column() {
        let a = FrameBuffer::new(8, 3, AddressMode::Dot);
        let mut b = a.clone();
        b.set(3, 2, Cell::dot(palette::GOLD));
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert_eq!(text(&out), "\x1b[3;7H\x1b[48;5;221m  \x1b[0m");
    }

    #[test]
    fn draw_swap_diffs_after_first_frame_and_redraws_on_resize() {
        let mut r = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(4, 2, AddressMode::Char);
        r.draw_swap(&mut fb).unwrap();
        assert!(text(r.writer()).contains("\x1b[2J"));

        let before = r.writer().len();
        fb.clear(Cell::BLANK);
        let n = r.draw_swap(&mut fb).unwrap();
        assert_eq!(n, 0);
        assert_eq!(r.writer().len(), before);

        fb.resize(5, 2);
        fb.clear(Cell::BLANK);
        r.draw_swap(&mut fb).unwrap();
        assert_eq!(text(r.writer()).matches("\x1b[2J").count(), 2);
    }

    #[test]
    fn invalidate_forces_full_redraw() {
        let mut r = TerminalRenderer::with_writer(Vec::new());
        let mut fb = FrameBuffer::new(2, 2, AddressMode::Dot);
        r.draw_swap(&mut fb).unwrap();
        r.invalidate();
        fb.clear(Cell::BLANK);
        r.draw_swap(&mut fb).unwrap();
        assert_eq!(text(r.writer()).matches("\x1b[2J").count(), 2);
    }
}
