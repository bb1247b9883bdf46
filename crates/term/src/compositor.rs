//! Sprite compositor: overlays sprites and ambient entities onto a framebuffer.
//!
//! Nothing here holds state between ticks. Callers pass the tick so frame
//! selection stays a pure function of it, and draw in back-to-front order.

use crate::core::{frame_index, DrawOrder, LayeredSprite, Meteor, SpriteFrame, Star};
use crate::fb::{Cell, FrameBuffer};
use crate::types::AddressMode;

const DRAW_ORDERS: [DrawOrder; 4] = [
    DrawOrder::Background,
    DrawOrder::Decoration,
    DrawOrder::Body,
    DrawOrder::Overlay,
];

/// Copy every visible cell of `frame` into `fb` with its top-left corner at
/// grid position `(x, y)`. Off-grid cells are dropped.
///
/// Returns the number of cells written.
pub fn blit(fb: &mut FrameBuffer, frame: &SpriteFrame, x: i32, y: i32) -> usize {
    let mut written = 0;
    for (row, colors) in frame.colors.iter().enumerate() {
        let gy = y + row as i32;
        if gy < 0 || gy >= fb.height() as i32 {
            continue;
        }
        for col in 0..colors.len() {
            let gx = x + col as i32;
            if gx < 0 || gx >= fb.width() as i32 {
                continue;
            }
            if let Some((ch, color)) = frame.cell(col, row) {
                let cell = match fb.mode() {
                    AddressMode::Char => Cell::glyph(ch, color),
                    AddressMode::Dot => Cell::dot(color),
                };
                if fb.put(gx, gy, cell) {
                    written += 1;
                }
            }
        }
    }
    written
}

/// Draw every layer of a layered sprite anchored at `(x, y)`, lowest
/// [`DrawOrder`] first. Layers sharing an order keep their declared order.
pub fn compose(fb: &mut FrameBuffer, sprite: &LayeredSprite, tick: u64, x: i32, y: i32) -> usize {
    let mut written = 0;
    for order in DRAW_ORDERS {
        for layer in sprite.layers.iter().filter(|l| l.order == order) {
            let index = frame_index(tick, layer.sprite.frame_count());
            if let Some(frame) = layer.sprite.frame(index) {
                written += blit(fb, frame, x + layer.dx, y + layer.dy);
            }
        }
    }
    written
}

/// Tile a backdrop frame across the full width with its bottom row on the
/// grid's bottom row.
pub fn tile_backdrop(fb: &mut FrameBuffer, frame: &SpriteFrame, width: u16, height: u16) {
    if width == 0 {
        return;
    }
    let y = fb.height() as i32 - height as i32;
    let mut x = 0i32;
    while x < fb.width() as i32 {
        blit(fb, frame, x, y);
        x += width as i32;
    }
}

pub fn draw_stars<'a>(fb: &mut FrameBuffer, stars: impl Iterator<Item = &'a Star>) {
    for star in stars {
        let (x, y) = star.cell();
        fb.put(x, y, Cell::dot(star.color()));
    }
}

/// Draw meteors tail first so each head sits on top of its own trail.
pub fn draw_meteors<'a>(fb: &mut FrameBuffer, meteors: impl Iterator<Item = &'a Meteor>) {
    for meteor in meteors {
        for (x, y, color) in meteor.trail_cells() {
            fb.put(x, y, Cell::dot(color));
        }
        let (x, y) = meteor.cell();
        fb.put(x, y, Cell::dot(meteor.color));
    }
}
