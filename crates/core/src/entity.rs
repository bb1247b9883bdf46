//! Ambient entities: twinkling stars and falling meteors.
//!
//! Entities live in fixed-capacity pools. They are never freed: when one
//! leaves the field (past [`RESPAWN_MARGIN`]) it is re-spawned in place at a
//! fresh edge position within the same tick.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{
    palette, Color, METEOR_POOL_CAPACITY, RESPAWN_MARGIN, STAR_POOL_CAPACITY,
};

/// Visible grid size plus the off-screen margin entities may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub cols: i32,
    pub rows: i32,
    pub margin: i32,
}

impl Field {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols: cols as i32,
            rows: rows as i32,
            margin: RESPAWN_MARGIN,
        }
    }

    /// `true` while `(x, y)` is on screen or inside the margin.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let m = self.margin as f32;
        x >= -m && x <= self.cols as f32 + m && y >= -m && y <= self.rows as f32 + m
    }
}

const TWINKLE: [Color; 6] = [
    palette::SNOW,
    palette::SILVER,
    palette::DIM_GRAY,
    palette::DARK_GRAY,
    palette::DIM_GRAY,
    palette::SILVER,
];

/// A background star drifting slowly to the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    /// Position in the twinkle cycle.
    pub phase: u16,
    /// Ticks per twinkle step.
    pub period: u16,
}

impl Star {
    /// Spawn anywhere on screen (initial population).
    pub fn scattered(rng: &mut SimpleRng, field: Field) -> Self {
        let x = rng.range_f32(0.0, field.cols as f32);
        Self::at(rng, field, x)
    }

    /// Spawn on the right edge (respawn).
    pub fn at_edge(rng: &mut SimpleRng, field: Field) -> Self {
        let x = (field.cols - 1).max(0) as f32;
        Self::at(rng, field, x)
    }

    fn at(rng: &mut SimpleRng, field: Field, x: f32) -> Self {
        Self {
            x,
            y: rng.range_i32(0, field.rows) as f32,
            vx: -rng.range_f32(0.02, 0.15),
            phase: rng.next_range(TWINKLE.len() as u32 * 8) as u16,
            period: rng.range_i32(3, 9) as u16,
        }
    }

    /// State after one tick, before any respawn check.
    pub fn advanced(self) -> Self {
        Self {
            x: self.x + self.vx,
            phase: self.phase.wrapping_add(1),
            ..self
        }
    }

    pub fn color(&self) -> Color {
        let step = (self.phase / self.period.max(1)) as usize;
        TWINKLE[step % TWINKLE.len()]
    }

    /// Grid cell currently occupied.
    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

const METEOR_COLORS: [Color; 4] = [
    palette::SNOW,
    palette::PALE_YELLOW,
    palette::GOLD,
    palette::FOAM,
];

/// Colors along a meteor trail, head first.
pub const TRAIL_FADE: [Color; 4] = [
    palette::GOLD,
    palette::ORANGE,
    palette::EMBER,
    palette::DARK_GRAY,
];

/// A meteor falling diagonally down and to the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Meteor {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Color,
    /// Number of trail cells behind the head.
    pub trail: u8,
    /// Ticks since (re)spawn.
    pub age: u32,
}

impl Meteor {
    /// Spawn somewhere along the top edge, possibly above it so arrivals are
    /// staggered.
    pub fn spawn(rng: &mut SimpleRng, field: Field) -> Self {
        let x = rng.range_f32((field.cols / 4) as f32, (field.cols + field.margin - 1) as f32);
        let y = rng.range_f32(-(field.margin - 1) as f32, 0.0);
        Self {
            x,
            y,
            vx: -rng.range_f32(0.6, 1.6),
            vy: rng.range_f32(0.3, 0.9),
            color: rng.pick(&METEOR_COLORS).unwrap_or(palette::SNOW),
            trail: rng.range_i32(2, TRAIL_FADE.len() as i32 + 1) as u8,
            age: 0,
        }
    }

    /// Initial population: spread over the whole height so they don't arrive
    /// as one wave.
    pub fn scattered(rng: &mut SimpleRng, field: Field) -> Self {
        let mut m = Self::spawn(rng, field);
        m.y = rng.range_f32(-(field.margin - 1) as f32, field.rows as f32);
        m
    }

    pub fn advanced(self) -> Self {
        Self {
            x: self.x + self.vx,
            y: self.y + self.vy,
            age: self.age.saturating_add(1),
            ..self
        }
    }

    /// Grid cells of the trail, head excluded, nearest first.
    pub fn trail_cells(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        (1..=self.trail as usize).map(move |i| {
            let t = i as f32;
            let x = (self.x - self.vx * t).floor() as i32;
            let y = (self.y - self.vy * t).floor() as i32;
            (x, y, TRAIL_FADE[(i - 1).min(TRAIL_FADE.len() - 1)])
        })
    }

    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// Respawn rule: a star that left the field comes back on the right edge.
pub fn respawn_star(star: Star, rng: &mut SimpleRng, field: Field) -> Star {
    if field.contains(star.x, star.y) {
        star
    } else {
        Star::at_edge(rng, field)
    }
}

/// Respawn rule: a meteor that left the field comes back along the top.
pub fn respawn_meteor(meteor: Meteor, rng: &mut SimpleRng, field: Field) -> Meteor {
    if field.contains(meteor.x, meteor.y) {
        meteor
    } else {
        Meteor::spawn(rng, field)
    }
}

/// Fixed-capacity pool of stars.
#[derive(Debug, Clone, Default)]
pub struct StarField {
    stars: ArrayVec<Star, STAR_POOL_CAPACITY>,
}

impl StarField {
    /// Star count for a grid: roughly one per 24 cells, capped by the pool.
    pub fn density(cols: u16, rows: u16) -> usize {
        ((cols as usize * rows as usize) / 24).min(STAR_POOL_CAPACITY)
    }

    /// (Re)populate for a field. Existing stars are discarded.
    pub fn populate(&mut self, rng: &mut SimpleRng, field: Field, count: usize) {
        self.stars.clear();
        for _ in 0..count.min(STAR_POOL_CAPACITY) {
            self.stars.push(Star::scattered(rng, field));
        }
    }

    pub fn update(&mut self, rng: &mut SimpleRng, field: Field) {
        for star in self.stars.iter_mut() {
            *star = respawn_star(star.advanced(), rng, field);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Fixed-capacity pool of meteors.
#[derive(Debug, Clone, Default)]
pub struct MeteorShower {
    meteors: ArrayVec<Meteor, METEOR_POOL_CAPACITY>,
}

impl MeteorShower {
    pub fn populate(&mut self, rng: &mut SimpleRng, field: Field, count: usize) {
        self.meteors.clear();
        for _ in 0..count.min(METEOR_POOL_CAPACITY) {
            self.meteors.push(Meteor::scattered(rng, field));
        }
    }

    pub fn update(&mut self, rng: &mut SimpleRng, field: Field) {
        for meteor in self.meteors.iter_mut() {
            *meteor = respawn_meteor(meteor.advanced(), rng, field);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meteor> {
        self.meteors.iter()
    }

    pub fn len(&self) -> usize {
        self.meteors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meteors.is_empty()
    }
}
