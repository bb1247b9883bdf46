//! Scene sequencing for the multi-background tour.
//!
//! A [`Scene`] pairs a two-frame backdrop with how the sprite moves across
//! it. A [`Tour`] walks an ordered list of scenes; finishing the last scene
//! completes one pass.

use crate::assets;
use crate::motion::Traversal;
use crate::sprite::Sprite;
use crate::types::{palette, Color, Direction};

/// Horizontal span of the sprite within a scene, in percent of the travel
/// range: 0 is fully off-screen left, 100 is fully off-screen right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub from: u8,
    pub to: u8,
}

impl Span {
    pub const CROSSING: Span = Span { from: 100, to: 0 };

    /// Mirror for `-R`.
    pub fn mirrored(self) -> Self {
        Self {
            from: 100 - self.from.min(100),
            to: 100 - self.to.min(100),
        }
    }

    /// Resolve to `(start, end)` anchor columns for a sprite and grid width.
    pub fn resolve(self, sprite_width: u16, grid_cols: u16) -> (i32, i32) {
        let left = -(sprite_width as i32);
        let range = grid_cols as i32 + sprite_width as i32;
        let at = |pct: u8| left + range * pct.min(100) as i32 / 100;
        (at(self.from), at(self.to))
    }
}

/// One background and the sprite's path across it. Immutable once defined.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub name: &'static str,
    /// Two-frame backdrop tiled along the bottom of the grid.
    pub backdrop: &'static Sprite,
    pub sky: Color,
    pub span: Span,
    /// Cells the sprite moves per tick.
    pub step: u8,
    /// Rows between the sprite's bottom edge and the grid's bottom edge.
    pub lift: u16,
}

/// The bundled tour, in order.
pub static SCENES: [Scene; 3] = [
    Scene {
        name: "city",
        backdrop: &assets::CITY,
        sky: palette::NIGHT_SKY,
        span: Span::CROSSING,
        step: 1,
        lift: 1,
    },
    Scene {
        name: "hills",
        backdrop: &assets::HILLS,
        sky: palette::SEA,
        span: Span::CROSSING,
        step: 2,
        lift: 2,
    },
    Scene {
        name: "sea",
        backdrop: &assets::SEA,
        sky: palette::DEEP_SKY,
        span: Span::CROSSING,
        step: 1,
        lift: 3,
    },
];

/// What happened during one [`Tour::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourStep {
    /// Still in the same scene.
    Moved { col: i32 },
    /// Moved into the next scene.
    SceneChanged { col: i32 },
    /// Finished the last scene and started over from the first.
    PassComplete { col: i32 },
}

impl TourStep {
    pub fn col(self) -> i32 {
        match self {
            TourStep::Moved { col }
            | TourStep::SceneChanged { col }
            | TourStep::PassComplete { col } => col,
        }
    }
}

/// Cursor over an ordered list of scenes.
#[derive(Debug, Clone)]
pub struct Tour {
    scenes: &'static [Scene],
    index: usize,
    traversal: Traversal,
    sprite_width: u16,
    grid_cols: u16,
    direction: Direction,
}

impl Tour {
    /// `scenes` must be non-empty.
    pub fn new(
        scenes: &'static [Scene],
        sprite_width: u16,
        grid_cols: u16,
        direction: Direction,
    ) -> Self {
        let traversal = Self::traversal_for(&scenes[0], sprite_width, grid_cols, direction);
        Self {
            scenes,
            index: 0,
            traversal,
            sprite_width,
            grid_cols,
            direction,
        }
    }

    fn traversal_for(
        scene: &Scene,
        sprite_width: u16,
        grid_cols: u16,
        direction: Direction,
    ) -> Traversal {
        let span = match direction {
            Direction::Leftward => scene.span,
            Direction::Rightward => scene.span.mirrored(),
        };
        let (start, end) = span.resolve(sprite_width, grid_cols);
        Traversal::new(start, end, scene.step as i32)
    }

    pub fn scene(&self) -> &Scene {
        &self.scenes[self.index]
    }

    pub fn scene_index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) -> TourStep {
        if let Some(col) = self.traversal.advance() {
            return TourStep::Moved { col };
        }

        self.index = (self.index + 1) % self.scenes.len();
        self.traversal = Self::traversal_for(
            &self.scenes[self.index],
            self.sprite_width,
            self.grid_cols,
            self.direction,
        );
        // A fresh traversal always yields at least its start column.
        let col = self.traversal.advance().unwrap_or_else(|| self.traversal.start());
        if self.index == 0 {
            TourStep::PassComplete { col }
        } else {
            TourStep::SceneChanged { col }
        }
    }

    /// Re-derive the current scene's endpoints for a new grid width.
    pub fn resize(&mut self, grid_cols: u16) {
        self.grid_cols = grid_cols;
        let fresh = Self::traversal_for(self.scene(), self.sprite_width, grid_cols, self.direction);
        self.traversal.rebase(fresh.start(), fresh.end());
    }

    /// Ticks one full pass over every scene takes.
    pub fn pass_len(&self) -> usize {
        self.scenes
            .iter()
            .map(|s| {
                Self::traversal_for(s, self.sprite_width, self.grid_cols, self.direction).len()
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_resolves_to_off_screen_edges() {
        assert_eq!(Span::CROSSING.resolve(10, 40), (40, -10));
        assert_eq!(Span::CROSSING.mirrored().resolve(10, 40), (-10, 40));
        assert_eq!(Span { from: 50, to: 0 }.resolve(10, 40), (15, -10));
    }

    #[test]
    fn tour_visits_scenes_in_order_and_completes_a_pass() {
        let mut tour = Tour::new(&SCENES, 4, 20, Direction::Leftward);
        let mut changes = Vec::new();
        let mut ticks = 0usize;
        loop {
            ticks += 1;
            match tour.advance() {
                TourStep::Moved { .. } => {}
                TourStep::SceneChanged { .. } => changes.push(tour.scene().name),
                TourStep::PassComplete { .. } => break,
            }
        }
        assert_eq!(changes, vec!["hills", "sea"]);
        assert_eq!(tour.scene_index(), 0);
        assert_eq!(ticks, tour.pass_len() + 1);
    }

    #[test]
    fn scene_step_is_respected() {
        let mut tour = Tour::new(&SCENES[1..2], 4, 20, Direction::Leftward);
        let a = tour.advance().col();
        let b = tour.advance().col();
        assert_eq!(a - b, 2);
    }

    #[test]
    fn resize_rebases_current_scene() {
        let mut tour = Tour::new(&SCENES, 4, 20, Direction::Leftward);
        tour.advance();
        tour.resize(10);
        assert_eq!(tour.advance().col(), 10);
    }
}
