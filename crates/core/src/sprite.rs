//! Sprite definitions.
//!
//! A sprite is a fixed-size, multi-frame grid. Each frame pairs a glyph grid
//! with a color grid of the same shape; one color code per cell. Sprites are
//! `'static` data and never mutated.
//!
//! Color codes:
//!
//! | code | color | code | color |
//! |------|-------|------|-------|
//! | `k` | gray | `o` | orange |
//! | `r` | red | `p` | pale yellow |
//! | `g` | green | `G` | gold |
//! | `y` | yellow | `e` | ember |
//! | `b` | blue | `s` | snow |
//! | `m` | magenta | `v` | silver |
//! | `c` | cyan | `d` | dim gray |
//! | `w` | white | `D` | dark gray |
//! | `f` | forest | `l` | grass |
//! | `a` | sea | `A` | foam |
//! | `B` | brick | `W` | lit window |
//! | `R` | rock | `n` | night sky |
//! | `N` | black | ` ` | terminal default |
//!
//! `.` is the transparent marker.

use crate::types::{palette, Color};

/// Color-grid marker meaning "leave the buffer unchanged".
pub const TRANSPARENT: u8 = b'.';

/// Map a color-grid code to a color. `None` means transparent.
pub fn color_for_code(code: u8) -> Option<Color> {
    let color = match code {
        TRANSPARENT => return None,
        b'k' => palette::GRAY,
        b'r' => palette::RED,
        b'g' => palette::GREEN,
        b'y' => palette::YELLOW,
        b'b' => palette::BLUE,
        b'm' => palette::MAGENTA,
        b'c' => palette::CYAN,
        b'w' => palette::WHITE,
        b'o' => palette::ORANGE,
        b'p' => palette::PALE_YELLOW,
        b'G' => palette::GOLD,
        b'e' => palette::EMBER,
        b's' => palette::SNOW,
        b'v' => palette::SILVER,
        b'd' => palette::DIM_GRAY,
        b'D' => palette::DARK_GRAY,
        b'f' => palette::FOREST,
        b'l' => palette::GRASS,
        b'a' => palette::SEA,
        b'A' => palette::FOAM,
        b'B' => palette::BRICK,
        b'W' => palette::WINDOW,
        b'R' => palette::ROCK,
        b'n' => palette::NIGHT_SKY,
        b'N' => palette::BLACK,
        _ => Color::Default,
    };
    Some(color)
}

/// One animation frame.
///
/// `glyphs` may be empty for dot-art frames, in which case every
/// non-transparent, non-blank color code is drawn as a solid pixel.
#[derive(Debug, Clone, Copy)]
pub struct SpriteFrame {
    pub glyphs: &'static [&'static str],
    pub colors: &'static [&'static str],
}

impl SpriteFrame {
    pub const fn new(glyphs: &'static [&'static str], colors: &'static [&'static str]) -> Self {
        Self { glyphs, colors }
    }

    /// A frame described only by its color grid.
    pub const fn dots(colors: &'static [&'static str]) -> Self {
        Self { glyphs: &[], colors }
    }

    fn is_dot_art(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Visible cell at `(x, y)` within the frame, or `None` if transparent
    /// or outside the frame.
    pub fn cell(&self, x: usize, y: usize) -> Option<(char, Color)> {
        let code = *self.colors.get(y)?.as_bytes().get(x)?;
        if self.is_dot_art() {
            if code == b' ' {
                return None;
            }
            return color_for_code(code).map(|c| (' ', c));
        }

        let glyph = *self.glyphs.get(y)?.as_bytes().get(x)?;
        if glyph == b' ' {
            return None;
        }
        color_for_code(code).map(|c| (glyph as char, c))
    }

    fn width(&self) -> usize {
        let rows = if self.is_dot_art() {
            self.colors
        } else {
            self.glyphs
        };
        rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    fn height(&self) -> usize {
        if self.is_dot_art() {
            self.colors.len()
        } else {
            self.glyphs.len()
        }
    }
}

/// A named, multi-frame sprite.
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub name: &'static str,
    pub frames: &'static [SpriteFrame],
}

impl Sprite {
    pub const fn new(name: &'static str, frames: &'static [SpriteFrame]) -> Self {
        Self { name, frames }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame by index, wrapping around so any tick-derived index is valid.
    pub fn frame(&self, index: usize) -> Option<&SpriteFrame> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames.get(index % self.frames.len())
    }

    /// Width in cells (widest row of any frame).
    pub fn width(&self) -> u16 {
        self.frames.iter().map(|f| f.width()).max().unwrap_or(0) as u16
    }

    /// Height in cells (tallest frame).
    pub fn height(&self) -> u16 {
        self.frames.iter().map(|f| f.height()).max().unwrap_or(0) as u16
    }
}

/// Declared occlusion order. Layers with a higher order are drawn later and
/// cover lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawOrder {
    Background = 0,
    Decoration = 1,
    Body = 2,
    Overlay = 3,
}

/// A sprite placed at a fixed offset inside a composite asset.
#[derive(Debug, Clone, Copy)]
pub struct SpriteLayer {
    pub name: &'static str,
    pub order: DrawOrder,
    /// Offset of this layer's top-left corner from the asset anchor, in cells.
    pub dx: i32,
    pub dy: i32,
    pub sprite: &'static Sprite,
}

/// An ordered stack of sprite layers drawn as one unit.
#[derive(Debug, Clone, Copy)]
pub struct LayeredSprite {
    pub name: &'static str,
    pub layers: &'static [SpriteLayer],
}

impl LayeredSprite {
    /// Bounding box of all layers, `(width, height)` in cells.
    pub fn size(&self) -> (u16, u16) {
        let mut w = 0i32;
        let mut h = 0i32;
        for layer in self.layers {
            w = w.max(layer.dx + layer.sprite.width() as i32);
            h = h.max(layer.dy + layer.sprite.height() as i32);
        }
        (w.max(0) as u16, h.max(0) as u16)
    }

    pub fn width(&self) -> u16 {
        self.size().0
    }

    pub fn height(&self) -> u16 {
        self.size().1
    }
}

/// Frame to show on a given tick: a cyclic, restartable animation.
pub fn frame_index(tick: u64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    (tick % frame_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    static ARROW: Sprite = Sprite::new(
        "arrow",
        &[
            SpriteFrame::new(&["<=- ", " x  "], &["rgb.", " ..."]),
            SpriteFrame::new(&["<-= "], &["rbg."]),
        ],
    );

    static DOTS: Sprite = Sprite::new("dots", &[SpriteFrame::dots(&["r.", " w"])]);

    #[test]
    fn transparent_marker_and_blank_glyphs_are_skipped() {
        let f = ARROW.frame(0).unwrap();
        assert_eq!(f.cell(0, 0), Some(('<', palette::RED)));
        assert_eq!(f.cell(2, 0), Some(('-', palette::BLUE)));
        // Blank glyph under a color.
        assert_eq!(f.cell(3, 0), None);
        // Transparent color under a visible glyph.
        assert_eq!(f.cell(1, 1), None);
        // Outside the frame.
        assert_eq!(f.cell(9, 0), None);
        assert_eq!(f.cell(0, 9), None);
    }

    #[test]
    fn dot_frames_use_color_grid_only() {
        let f = DOTS.frame(0).unwrap();
        assert_eq!(f.cell(0, 0), Some((' ', palette::RED)));
        assert_eq!(f.cell(1, 0), None);
        assert_eq!(f.cell(0, 1), None);
        assert_eq!(f.cell(1, 1), Some((' ', palette::WHITE)));
    }

    #[test]
    fn size_is_the_largest_frame() {
        assert_eq!(ARROW.width(), 4);
        assert_eq!(ARROW.height(), 2);
        assert_eq!(DOTS.width(), 2);
    }

    #[test]
    fn frame_lookup_wraps() {
        assert_eq!(ARROW.frame(3).unwrap().colors, ARROW.frame(1).unwrap().colors);
    }

    #[test]
    fn frame_index_cycles() {
        let seq: Vec<_> = (0..7).map(|t| frame_index(t, 3)).collect();
        assert_eq!(seq, vec![0, 1, 2, 0, 1, 2, 0]);
        assert_eq!(frame_index(42, 0), 0);
    }

    #[test]
    fn unknown_codes_fall_back_to_default_color() {
        assert_eq!(color_for_code(b' '), Some(Color::Default));
        assert_eq!(color_for_code(b'?'), Some(Color::Default));
        assert_eq!(color_for_code(TRANSPARENT), None);
    }
}
