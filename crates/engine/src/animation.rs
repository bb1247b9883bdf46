//! Per-variant animations: world state that turns into a frame each tick.
//!
//! An [`Animation`] never touches the terminal. The driver hands it the grid
//! size on start and on every change, asks it to advance once per tick, and
//! then asks it to paint into the cleared frame buffer.

use log::debug;

use crate::config::RunConfig;
use crate::core::assets::{CART, LOCOMOTIVE, SAUCER};
use crate::core::{
    anchor_row, crossing_span, frame_index, Field, LayeredSprite, MeteorShower, SimpleRng,
    StarField, Tour, TourStep, Traversal, SCENES,
};
use crate::term::{compose, draw_meteors, draw_stars, tile_backdrop, Cell, FrameBuffer};
use crate::types::{palette, Direction, Mode, METEOR_POOL_CAPACITY};

/// Ticks each backdrop frame is held for.
const BACKDROP_HOLD_TICKS: u64 = 4;

/// Outcome of one update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Moving,
    /// The tick that just ran finished a pass. Nothing was advanced into the
    /// next pass that has not already been rewound to its start.
    PassComplete,
}

pub trait Animation {
    fn mode(&self) -> Mode;

    /// Cell the whole grid is cleared to before composing.
    fn background(&self) -> Cell;

    /// Re-derive everything that depends on the grid size.
    fn resize(&mut self, width: u16, height: u16);

    fn update(&mut self, tick: u64) -> Progress;

    /// Paint the current state. Layers go back to front.
    fn compose(&self, tick: u64, fb: &mut FrameBuffer);

    /// Ticks one pass takes at the current grid size.
    fn pass_len(&self) -> usize;
}

/// Build the animation for a run configuration and an initial grid size.
pub fn animation_for(config: &RunConfig, width: u16, height: u16) -> Box<dyn Animation> {
    match config.mode {
        Mode::Runner => Box::new(RunnerAnimation::new(
            &LOCOMOTIVE,
            config.direction,
            config.row,
            width,
            height,
        )),
        Mode::Meteor => Box::new(MeteorAnimation::new(config, width, height)),
        Mode::Tour => Box::new(TourAnimation::new(config, width, height)),
    }
}

/// A layered sprite moving across the grid at a fixed row.
#[derive(Debug, Clone)]
struct Crossing {
    sprite: &'static LayeredSprite,
    traversal: Traversal,
    direction: Direction,
    requested_row: Option<i32>,
    col: i32,
    row: i32,
}

impl Crossing {
    fn new(
        sprite: &'static LayeredSprite,
        direction: Direction,
        requested_row: Option<i32>,
        width: u16,
        height: u16,
    ) -> Self {
        let traversal = Traversal::crossing(sprite.width(), width, direction);
        let mut crossing = Self {
            sprite,
            traversal,
            direction,
            requested_row,
            col: traversal.start(),
            row: 0,
        };
        crossing.resize(width, height);
        crossing
    }

    fn resize(&mut self, width: u16, height: u16) {
        let (start, end) = crossing_span(self.sprite.width(), width, self.direction);
        self.traversal.rebase(start, end);
        self.row = anchor_row(self.requested_row, height, self.sprite.height()) - 1;
    }

    fn update(&mut self) -> Progress {
        match self.traversal.advance() {
            Some(col) => {
                self.col = col;
                Progress::Moving
            }
            None => {
                // Already rewound: the next pass starts on this tick.
                self.col = self.traversal.advance().unwrap_or(self.traversal.start());
                Progress::PassComplete
            }
        }
    }

    fn compose(&self, tick: u64, fb: &mut FrameBuffer) {
        compose(fb, self.sprite, tick, self.col, self.row);
    }
}

/// Character-mode locomotive on the terminal's own background.
#[derive(Debug, Clone)]
pub struct RunnerAnimation {
    crossing: Crossing,
}

impl RunnerAnimation {
    pub fn new(
        sprite: &'static LayeredSprite,
        direction: Direction,
        row: Option<i32>,
        width: u16,
        height: u16,
    ) -> Self {
        Self {
            crossing: Crossing::new(sprite, direction, row, width, height),
        }
    }

    /// Current anchor `(col, row)`, 0-based grid coordinates.
    pub fn anchor(&self) -> (i32, i32) {
        (self.crossing.col, self.crossing.row)
    }
}

impl Animation for RunnerAnimation {
    fn mode(&self) -> Mode {
        Mode::Runner
    }

    fn background(&self) -> Cell {
        Cell::BLANK
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.crossing.resize(width, height);
    }

    fn update(&mut self, _tick: u64) -> Progress {
        self.crossing.update()
    }

    fn compose(&self, tick: u64, fb: &mut FrameBuffer) {
        self.crossing.compose(tick, fb);
    }

    fn pass_len(&self) -> usize {
        self.crossing.traversal.len()
    }
}

fn meteor_count(width: u16) -> usize {
    (width as usize / 20).clamp(1, METEOR_POOL_CAPACITY)
}

/// Dot-mode night sky: twinkling stars, falling meteors and a saucer.
#[derive(Debug, Clone)]
pub struct MeteorAnimation {
    rng: SimpleRng,
    field: Field,
    stars: StarField,
    meteors: MeteorShower,
    crossing: Crossing,
}

impl MeteorAnimation {
    pub fn new(config: &RunConfig, width: u16, height: u16) -> Self {
        let mut anim = Self {
            rng: SimpleRng::new(config.seed),
            field: Field::new(width, height),
            stars: StarField::default(),
            meteors: MeteorShower::default(),
            crossing: Crossing::new(&SAUCER, config.direction, config.row, width, height),
        };
        anim.populate(width, height);
        anim
    }

    fn populate(&mut self, width: u16, height: u16) {
        self.field = Field::new(width, height);
        self.stars
            .populate(&mut self.rng, self.field, StarField::density(width, height));
        self.meteors
            .populate(&mut self.rng, self.field, meteor_count(width));
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn meteors(&self) -> &MeteorShower {
        &self.meteors
    }

    pub fn field(&self) -> Field {
        self.field
    }
}

impl Animation for MeteorAnimation {
    fn mode(&self) -> Mode {
        Mode::Meteor
    }

    fn background(&self) -> Cell {
        Cell::dot(palette::NIGHT_SKY)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.populate(width, height);
        self.crossing.resize(width, height);
        debug!(
            "meteor field repopulated: {} stars, {} meteors",
            self.stars.len(),
            self.meteors.len()
        );
    }

    fn update(&mut self, _tick: u64) -> Progress {
        self.stars.update(&mut self.rng, self.field);
        self.meteors.update(&mut self.rng, self.field);
        self.crossing.update()
    }

    fn compose(&self, tick: u64, fb: &mut FrameBuffer) {
        draw_stars(fb, self.stars.iter());
        draw_meteors(fb, self.meteors.iter());
        self.crossing.compose(tick, fb);
    }

    fn pass_len(&self) -> usize {
        self.crossing.traversal.len()
    }
}

/// Dot-mode tour over the bundled scenes, one backdrop after another.
#[derive(Debug, Clone)]
pub struct TourAnimation {
    rng: SimpleRng,
    tour: Tour,
    sprite: &'static LayeredSprite,
    requested_row: Option<i32>,
    stars: StarField,
    sky: Field,
    height: u16,
    col: i32,
}

impl TourAnimation {
    pub fn new(config: &RunConfig, width: u16, height: u16) -> Self {
        let tour = Tour::new(&SCENES, CART.width(), width, config.direction);
        let mut anim = Self {
            rng: SimpleRng::new(config.seed),
            tour,
            sprite: &CART,
            requested_row: config.row,
            stars: StarField::default(),
            sky: Field::new(width, height),
            height,
            col: -(CART.width() as i32),
        };
        anim.resize(width, height);
        anim
    }

    pub fn scene_index(&self) -> usize {
        self.tour.scene_index()
    }

    fn backdrop_height(&self) -> u16 {
        self.tour.scene().backdrop.height()
    }

    /// 0-based grid row of the sprite's top edge in the current scene.
    pub fn sprite_row(&self) -> i32 {
        let h = self.sprite.height() as i32;
        let lifted = self.height as i32 - self.tour.scene().lift as i32 - h;
        match self.requested_row {
            Some(_) => anchor_row(self.requested_row, self.height, self.sprite.height()) - 1,
            None => lifted.max(0),
        }
    }
}

impl Animation for TourAnimation {
    fn mode(&self) -> Mode {
        Mode::Tour
    }

    fn background(&self) -> Cell {
        Cell::dot(self.tour.scene().sky)
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.height = height;
        self.tour.resize(width);
        self.sky = Field::new(width, height.saturating_sub(self.backdrop_height()));
        let count = StarField::density(width, self.sky.rows as u16) / 2;
        self.stars.populate(&mut self.rng, self.sky, count);
    }

    fn update(&mut self, _tick: u64) -> Progress {
        self.stars.update(&mut self.rng, self.sky);
        let step = self.tour.advance();
        self.col = step.col();
        match step {
            TourStep::Moved { .. } => Progress::Moving,
            TourStep::SceneChanged { .. } => {
                debug!("tour scene: {}", self.tour.scene().name);
                Progress::Moving
            }
            TourStep::PassComplete { .. } => Progress::PassComplete,
        }
    }

    fn compose(&self, tick: u64, fb: &mut FrameBuffer) {
        let scene = self.tour.scene();
        draw_stars(fb, self.stars.iter());
        let index = frame_index(tick / BACKDROP_HOLD_TICKS, scene.backdrop.frame_count());
        if let Some(frame) = scene.backdrop.frame(index) {
            tile_backdrop(
                fb,
                frame,
                scene.backdrop.width(),
                scene.backdrop.height(),
            );
        }
        compose(fb, self.sprite, tick, self.col, self.sprite_row());
    }

    fn pass_len(&self) -> usize {
        self.tour.pass_len()
    }
}
