//! Core animation logic - pure, deterministic, and testable
//!
//! Everything here is free of terminal I/O: sprites and their layering,
//! ambient entity pools, traversal paths and scene sequencing. Given the
//! same seed and the same grid sizes, a run produces the same states tick
//! for tick.
//!
//! # Module Structure
//!
//! - [`sprite`]: multi-frame glyph/color grids, draw order, frame selection
//! - [`assets`]: the bundled art
//! - [`motion`]: traversal of the sprite across the grid, anchor rows
//! - [`entity`]: stars and meteors with their respawn rules
//! - [`scene`]: ordered backdrops for the tour
//! - [`rng`]: seedable generator behind every random draw
//!
//! # Example
//!
//! ```
//! use dote_core::{frame_index, Traversal};
//! use dote_types::Direction;
//!
//! let mut path = Traversal::crossing(6, 80, Direction::Leftward);
//! assert_eq!(path.advance(), Some(79));
//! assert_eq!(frame_index(4, 3), 1);
//! ```

pub mod assets;
pub mod entity;
pub mod motion;
pub mod rng;
pub mod scene;
pub mod sprite;

pub use dote_types as types;

pub use entity::{respawn_meteor, respawn_star, Field, Meteor, MeteorShower, Star, StarField};
pub use motion::{anchor_row, crossing_span, Traversal};
pub use rng::SimpleRng;
pub use scene::{Scene, Span, Tour, TourStep, SCENES};
pub use sprite::{
    color_for_code, frame_index, DrawOrder, LayeredSprite, Sprite, SpriteFrame, SpriteLayer,
    TRANSPARENT,
};
