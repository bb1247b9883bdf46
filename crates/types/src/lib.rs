//! Shared types and constants.
//!
//! Everything here is plain data with no external dependencies, so the
//! simulation (`core`), the terminal layer (`term`) and the loop driver
//! (`engine`) can all agree on colors, sizes and timing.
//!
//! # Timing
//!
//! | Constant | Value | Flag |
//! |----------|-------|------|
//! | `DEFAULT_DELAY_MS` | 60 | (none) |
//! | `SLOW_DELAY_MS` | 100 | `-s` |
//! | `FAST_DELAY_MS` | 40 | `-f` |
//! | `SUPERFAST_DELAY_MS` | 20 | `-S` |
//!
//! # Examples
//!
//! ```
//! use dote_types::{Dimensions, Direction, Mode};
//!
//! let dims = Dimensions::new(0, 0);
//! assert_eq!(dims, Dimensions::new(16, 8));
//!
//! assert_eq!(Direction::Leftward.step(), -1);
//! assert_eq!(Mode::from_str("Meteor"), Some(Mode::Meteor));
//! ```

/// Frame delay used when no speed flag is given.
pub const DEFAULT_DELAY_MS: u64 = 60;

/// Frame delay for `-s`.
pub const SLOW_DELAY_MS: u64 = 100;

/// Frame delay for `-f`.
pub const FAST_DELAY_MS: u64 = 40;

/// Frame delay for `-S`.
pub const SUPERFAST_DELAY_MS: u64 = 20;

/// Number of passes when `-n` is not given.
pub const DEFAULT_PASSES: u32 = 1;

/// Terminal width assumed when neither the tty nor `COLUMNS` can tell us.
pub const DEFAULT_COLS: u16 = 80;

/// Terminal height assumed when neither the tty nor `LINES` can tell us.
pub const DEFAULT_ROWS: u16 = 24;

/// Smallest width the grid is ever sized to.
pub const MIN_COLS: u16 = 16;

/// Smallest height the grid is ever sized to.
pub const MIN_ROWS: u16 = 8;

/// Distance (in grid cells) an ambient entity may travel past the visible
/// edge before it is respawned.
pub const RESPAWN_MARGIN: i32 = 10;

/// Upper bound on pooled stars.
pub const STAR_POOL_CAPACITY: usize = 256;

/// Upper bound on pooled meteors.
pub const METEOR_POOL_CAPACITY: usize = 8;

/// A display color.
///
/// `Indexed` covers both the 16 standard ANSI colors (0-15) and the
/// 256-color palette (16-255). `Default` is the terminal's own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Indexed(u8),
}

impl Color {
    /// Palette index, or `None` for the terminal default.
    pub const fn index(self) -> Option<u8> {
        match self {
            Color::Default => None,
            Color::Indexed(n) => Some(n),
        }
    }
}

/// Named entries of the ANSI palette used by the bundled art.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::Indexed(0);
    pub const GRAY: Color = Color::Indexed(8);
    pub const RED: Color = Color::Indexed(9);
    pub const GREEN: Color = Color::Indexed(10);
    pub const YELLOW: Color = Color::Indexed(11);
    pub const BLUE: Color = Color::Indexed(12);
    pub const MAGENTA: Color = Color::Indexed(13);
    pub const CYAN: Color = Color::Indexed(14);
    pub const WHITE: Color = Color::Indexed(15);

    pub const NIGHT_SKY: Color = Color::Indexed(17);
    pub const DEEP_SKY: Color = Color::Indexed(16);
    pub const ORANGE: Color = Color::Indexed(208);
    pub const PALE_YELLOW: Color = Color::Indexed(229);
    pub const GOLD: Color = Color::Indexed(221);
    pub const EMBER: Color = Color::Indexed(166);
    pub const SNOW: Color = Color::Indexed(231);
    pub const SILVER: Color = Color::Indexed(250);
    pub const DIM_GRAY: Color = Color::Indexed(244);
    pub const DARK_GRAY: Color = Color::Indexed(238);
    pub const FOREST: Color = Color::Indexed(22);
    pub const GRASS: Color = Color::Indexed(28);
    pub const SEA: Color = Color::Indexed(25);
    pub const FOAM: Color = Color::Indexed(117);
    pub const BRICK: Color = Color::Indexed(95);
    pub const WINDOW: Color = Color::Indexed(228);
    pub const ROCK: Color = Color::Indexed(60);
}

/// Terminal size in character cells. Never zero in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub cols: u16,
    pub rows: u16,
}

impl Dimensions {
    /// Build dimensions, raising each axis to its floor.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols.max(MIN_COLS),
            rows: rows.max(MIN_ROWS),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_COLS, DEFAULT_ROWS)
    }
}

/// How grid cells map onto terminal columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressMode {
    /// One cell per terminal column; cells carry a glyph and a foreground color.
    Char,
    /// One cell per two terminal columns; cells are solid background color.
    Dot,
}

impl AddressMode {
    /// Terminal columns occupied by one grid cell.
    pub const fn cell_width(self) -> u16 {
        match self {
            AddressMode::Char => 1,
            AddressMode::Dot => 2,
        }
    }
}

/// Horizontal direction of travel for the traversing sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Enter on the right edge, exit on the left (the default).
    #[default]
    Leftward,
    /// Enter on the left edge, exit on the right (`-R`).
    Rightward,
}

impl Direction {
    pub const fn step(self) -> i32 {
        match self {
            Direction::Leftward => -1,
            Direction::Rightward => 1,
        }
    }
}

/// Speed presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Fast,
    SuperFast,
}

impl Speed {
    pub const fn delay_ms(self) -> u64 {
        match self {
            Speed::Slow => SLOW_DELAY_MS,
            Speed::Fast => FAST_DELAY_MS,
            Speed::SuperFast => SUPERFAST_DELAY_MS,
        }
    }
}

/// Which animation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Character-art vehicle crossing the terminal.
    #[default]
    Runner,
    /// Full-screen night sky with stars, meteors and a dot-art sprite.
    Meteor,
    /// Dot-art sprite touring a sequence of backgrounds.
    Tour,
}

impl Mode {
    /// Parse a mode name (case-insensitive).
    ///
    /// ```
    /// use dote_types::Mode;
    ///
    /// assert_eq!(Mode::from_str("runner"), Some(Mode::Runner));
    /// assert_eq!(Mode::from_str("TOUR"), Some(Mode::Tour));
    /// assert_eq!(Mode::from_str("warp"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "runner" | "run" => Some(Mode::Runner),
            "meteor" | "meteors" => Some(Mode::Meteor),
            "tour" | "scenes" => Some(Mode::Tour),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Runner => "runner",
            Mode::Meteor => "meteor",
            Mode::Tour => "tour",
        }
    }

    /// Grid addressing used by this mode.
    pub const fn address_mode(self) -> AddressMode {
        match self {
            Mode::Runner => AddressMode::Char,
            Mode::Meteor | Mode::Tour => AddressMode::Dot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_presets_match_flags() {
        assert_eq!(Speed::Slow.delay_ms(), 100);
        assert_eq!(Speed::Fast.delay_ms(), 40);
        assert_eq!(Speed::SuperFast.delay_ms(), 20);
        assert_eq!(DEFAULT_DELAY_MS, 60);
    }

    #[test]
    fn dimensions_never_zero() {
        let d = Dimensions::new(0, 0);
        assert!(d.cols > 0 && d.rows > 0);
        assert_eq!(Dimensions::new(200, 60), Dimensions { cols: 200, rows: 60 });
        assert_eq!(Dimensions::default(), Dimensions { cols: 80, rows: 24 });
    }

    #[test]
    fn dot_mode_cells_are_two_columns_wide() {
        assert_eq!(AddressMode::Char.cell_width(), 1);
        assert_eq!(AddressMode::Dot.cell_width(), 2);
        assert_eq!(Mode::Runner.address_mode(), AddressMode::Char);
        assert_eq!(Mode::Tour.address_mode(), AddressMode::Dot);
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in [Mode::Runner, Mode::Meteor, Mode::Tour] {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
        }
    }
}
