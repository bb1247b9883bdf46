//! Command-line flags.
//!
//! Numeric values are read the forgiving way: a leading sign and digits are
//! honored and anything after them is ignored, so `-d 15ms` means 15. A value
//! with no digits at all leaves that flag at its default.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser};

use crate::engine::RunConfig;
use crate::types::{Direction, Mode, Speed, DEFAULT_DELAY_MS, DEFAULT_PASSES};

/// A numeric flag value; `None` when the text held no number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lenient(pub Option<i64>);

impl Lenient {
    pub fn or(self, default: i64) -> i64 {
        self.0.unwrap_or(default)
    }
}

/// Leading integer of `s`: optional whitespace, optional sign, digits.
/// Saturates instead of overflowing.
pub fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }
    seen.then_some(if negative { -value } else { value })
}

fn lenient(s: &str) -> Result<Lenient, String> {
    Ok(Lenient(leading_int(s)))
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_str(s).ok_or_else(|| format!("unknown mode `{s}` (expected runner, meteor or tour)"))
}

/// dote - animated sprites for your terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "dote", version, disable_version_flag = true)]
#[command(about = "Animated sprites for your terminal. Press q to quit.")]
pub struct Cli {
    /// Slow speed (100 ms per frame)
    #[arg(short = 's')]
    pub slow: bool,

    /// Fast speed (40 ms per frame)
    #[arg(short = 'f')]
    pub fast: bool,

    /// Very fast speed (20 ms per frame)
    #[arg(short = 'S')]
    pub superfast: bool,

    /// Delay between frames in milliseconds [default: 60]
    #[arg(short = 'd', value_name = "MS", allow_hyphen_values = true, value_parser = lenient)]
    pub delay: Option<Lenient>,

    /// Number of passes, 0 runs until interrupted [default: 1]
    #[arg(short = 'n', value_name = "COUNT", allow_hyphen_values = true, value_parser = lenient)]
    pub passes: Option<Lenient>,

    /// Row (1-based) to run the sprite on [default: centered]
    #[arg(short = 'y', value_name = "ROW", allow_hyphen_values = true, value_parser = lenient)]
    pub row: Option<Lenient>,

    /// Reverse the direction of travel
    #[arg(short = 'R')]
    pub reverse: bool,

    /// Animation: runner, meteor or tour
    #[arg(short = 'm', long = "mode", default_value = "runner", value_parser = parse_mode)]
    pub mode: Mode,

    /// Seed for the random source [default: from the clock]
    #[arg(long = "seed", allow_hyphen_values = true, value_parser = lenient)]
    pub seed: Option<Lenient>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// Frame delay. An explicit `-d` wins over the speed presets, and the
    /// fastest preset given wins over slower ones.
    pub fn delay(&self) -> Duration {
        let ms = match self.delay {
            Some(value) => value.or(DEFAULT_DELAY_MS as i64).max(0) as u64,
            None if self.superfast => Speed::SuperFast.delay_ms(),
            None if self.fast => Speed::Fast.delay_ms(),
            None if self.slow => Speed::Slow.delay_ms(),
            None => DEFAULT_DELAY_MS,
        };
        Duration::from_millis(ms)
    }

    /// Pass count; negative counts mean "run forever" like 0 does.
    pub fn passes(&self) -> u32 {
        let n = self.passes.map_or(DEFAULT_PASSES as i64, |v| v.or(DEFAULT_PASSES as i64));
        n.clamp(0, u32::MAX as i64) as u32
    }

    pub fn row(&self) -> Option<i32> {
        self.row
            .and_then(|v| v.0)
            .map(|r| r.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }

    pub fn direction(&self) -> Direction {
        if self.reverse {
            Direction::Rightward
        } else {
            Direction::Leftward
        }
    }

    pub fn into_config(self, clock_seed: u32) -> RunConfig {
        RunConfig {
            mode: self.mode,
            delay: self.delay(),
            passes: self.passes(),
            row: self.row(),
            direction: self.direction(),
            seed: self.seed.and_then(|v| v.0).map_or(clock_seed, |s| s as u32),
        }
    }
}

/// Seed derived from the wall clock.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
