//! Sprite blits.
//!
//! The `_alpha` variants treat a space glyph in the sprite as transparent and leave
//! the destination cell untouched. Partial blits read the source rectangle
//! `[fx, fx + fw) x [fy, fy + fh)`; source cells outside the sprite read as a blank
//! space on black, so they are skipped by the alpha variant.

use super::{Canvas, Pen};
use crate::sprite::Sprite;
use crate::types::glyph;

#[inline]
fn source_pen(sprite: &Sprite, sx: i32, sy: i32) -> Pen {
    Pen::new(sprite.glyph(sx, sy), sprite.colour(sx, sy))
}

pub fn draw_sprite<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, sprite: &Sprite) {
    for j in 0..sprite.height() {
        for i in 0..sprite.width() {
            canvas.draw(x + i, y + j, source_pen(sprite, i, j));
        }
    }
}

pub fn draw_sprite_alpha<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, sprite: &Sprite) {
    for j in 0..sprite.height() {
        for i in 0..sprite.width() {
            let pen = source_pen(sprite, i, j);
            if pen.glyph != glyph::SPACE {
                canvas.draw(x + i, y + j, pen);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn draw_partial_sprite<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    fx: i32,
    fy: i32,
    fw: i32,
    fh: i32,
    sprite: &Sprite,
) {
    for j in 0..fh {
        for i in 0..fw {
            canvas.draw(x + i, y + j, source_pen(sprite, fx + i, fy + j));
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn draw_partial_sprite_alpha<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    fx: i32,
    fy: i32,
    fw: i32,
    fh: i32,
    sprite: &Sprite,
) {
    for j in 0..fh {
        for i in 0..fw {
            let pen = source_pen(sprite, fx + i, fy + j);
            if pen.glyph != glyph::SPACE {
                canvas.draw(x + i, y + j, pen);
            }
        }
    }
}
