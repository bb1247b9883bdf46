//! Sprite traversal across the grid.
//!
//! A traversal yields one anchor column per tick, from `start` to `end`
//! inclusive in steps of `step`, then reports the pass as complete and
//! rewinds.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    start: i32,
    end: i32,
    step: i32,
    next: i32,
}

impl Traversal {
    /// A traversal from `start` to `end`. The sign of `step` is taken from
    /// the direction of travel; its magnitude is at least 1.
    pub fn new(start: i32, end: i32, step: i32) -> Self {
        let magnitude = step.unsigned_abs().max(1) as i32;
        let step = if end < start { -magnitude } else { magnitude };
        Self {
            start,
            end,
            step,
            next: start,
        }
    }

    /// Full crossing of a `grid_cols`-wide grid by a sprite `sprite_width`
    /// cells wide. See [`crossing_span`] for the endpoints.
    pub fn crossing(sprite_width: u16, grid_cols: u16, direction: Direction) -> Self {
        let (start, end) = crossing_span(sprite_width, grid_cols, direction);
        Self::new(start, end, direction.step())
    }

    /// Yield the anchor column for this tick, or `None` once the pass is
    /// exhausted (the traversal rewinds to `start` at the same time).
    pub fn advance(&mut self) -> Option<i32> {
        if self.is_past_end(self.next) {
            self.next = self.start;
            return None;
        }
        let col = self.next;
        self.next += self.step;
        Some(col)
    }

    /// Move the endpoints (after a resize), keeping progress where possible.
    pub fn rebase(&mut self, start: i32, end: i32) {
        let step = self.step;
        *self = Self {
            next: self.next,
            ..Self::new(start, end, step)
        };
        // Snap back inside the new span if the old position is before its start.
        let before_start = if self.step < 0 {
            self.next > self.start
        } else {
            self.next < self.start
        };
        if before_start {
            self.next = self.start;
        }
    }

    /// Number of ticks one pass takes.
    pub fn len(&self) -> usize {
        ((self.end - self.start).unsigned_abs() / self.step.unsigned_abs()) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    fn is_past_end(&self, col: i32) -> bool {
        if self.step < 0 {
            col < self.end
        } else {
            col > self.end
        }
    }
}

/// `(start, end)` of a full crossing.
///
/// On the right edge the sprite's first column sits on the last grid column;
/// on the left edge it is fully off-screen. `Rightward` runs the same span
/// backwards.
pub fn crossing_span(sprite_width: u16, grid_cols: u16, direction: Direction) -> (i32, i32) {
    let off_left = -(sprite_width as i32);
    let off_right = grid_cols as i32 - 1;
    match direction {
        Direction::Leftward => (off_right, off_left),
        Direction::Rightward => (off_left, off_right),
    }
}

/// Centered 1-based row for a sprite of `sprite_height`, or `requested` when
/// it keeps the whole sprite on screen.
pub fn anchor_row(requested: Option<i32>, rows: u16, sprite_height: u16) -> i32 {
    let rows = rows as i32;
    let h = sprite_height as i32;
    match requested {
        Some(row) if row >= 1 && row <= rows - h + 1 => row,
        _ => (rows - h).max(0) / 2 + 1,
    }
}
