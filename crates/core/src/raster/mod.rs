//! Software rasterizer for character-cell targets.
//!
//! Every routine is built on a single primitive, [`Canvas::draw`], and never fails:
//! coordinates outside the target and non-positive radii or sizes are absorbed
//! silently. The routines are free functions in the submodules; [`Canvas`] exposes
//! them as provided methods so any target (a [`crate::ScreenBuffer`], a
//! [`crate::Sprite`]) can be drawn on the same way.
//!
//! # Module Structure
//!
//! - [`line`]: integer Bresenham lines
//! - [`circle`]: midpoint circle outline and fill
//! - [`triangle`]: triangle outline and scanline edge-walk fill
//! - [`rect`]: rectangle outline and fill (inclusive sizes)
//! - [`blit`]: sprite copies, with and without space-glyph transparency
//! - [`wireframe`]: rotate/scale/translate a 2D model and draw it as a closed polygon
//! - [`text`]: strings, one cell per `char`

pub mod blit;
pub mod circle;
pub mod line;
pub mod rect;
pub mod text;
pub mod triangle;
pub mod wireframe;

use crate::sprite::Sprite;
use crate::types::{glyph, Colour};

pub use wireframe::Pose;

/// Draw/fill style: the glyph and colour written into every touched cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pen {
    pub glyph: char,
    pub colour: Colour,
}

impl Pen {
    pub const fn new(glyph: char, colour: Colour) -> Self {
        Self { glyph, colour }
    }

    pub const fn solid(colour: Colour) -> Self {
        Self::new(glyph::SOLID, colour)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::solid(Colour::FG_WHITE)
    }
}

/// A grid of cells that shapes can be rasterized into.
pub trait Canvas {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Write one cell. Must be a no-op when `(x, y)` is outside the canvas.
    fn draw(&mut self, x: i32, y: i32, pen: Pen);

    /// Fill exactly `[0, width) x [0, height)`.
    fn clear(&mut self, pen: Pen) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.draw(x, y, pen);
            }
        }
    }

    /// Horizontal run from `x_start` to `x_end` inclusive.
    fn draw_span(&mut self, x_start: i32, x_end: i32, y: i32, pen: Pen) {
        line::draw_span(self, x_start, x_end, y, pen);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, pen: Pen) {
        line::draw_line(self, x1, y1, x2, y2, pen);
    }

    fn draw_line_points(&mut self, from: (i32, i32), to: (i32, i32), pen: Pen) {
        line::draw_line(self, from.0, from.1, to.0, to.1, pen);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, pen: Pen) {
        triangle::draw_triangle(self, x1, y1, x2, y2, x3, y3, pen);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_triangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, pen: Pen) {
        triangle::fill_triangle(self, x1, y1, x2, y2, x3, y3, pen);
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, pen: Pen) {
        circle::draw_circle(self, x, y, radius, pen);
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32, pen: Pen) {
        circle::fill_circle(self, x, y, radius, pen);
    }

    fn draw_rectangle(&mut self, x: i32, y: i32, size_x: i32, size_y: i32, pen: Pen) {
        rect::draw_rectangle(self, x, y, size_x, size_y, pen);
    }

    fn fill_rectangle(&mut self, x: i32, y: i32, size_x: i32, size_y: i32, pen: Pen) {
        rect::fill_rectangle(self, x, y, size_x, size_y, pen);
    }

    fn draw_sprite(&mut self, x: i32, y: i32, sprite: &Sprite) {
        blit::draw_sprite(self, x, y, sprite);
    }

    fn draw_sprite_alpha(&mut self, x: i32, y: i32, sprite: &Sprite) {
        blit::draw_sprite_alpha(self, x, y, sprite);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_partial_sprite(
        &mut self,
        x: i32,
        y: i32,
        fx: i32,
        fy: i32,
        fw: i32,
        fh: i32,
        sprite: &Sprite,
    ) {
        blit::draw_partial_sprite(self, x, y, fx, fy, fw, fh, sprite);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_partial_sprite_alpha(
        &mut self,
        x: i32,
        y: i32,
        fx: i32,
        fy: i32,
        fw: i32,
        fh: i32,
        sprite: &Sprite,
    ) {
        blit::draw_partial_sprite_alpha(self, x, y, fx, fy, fw, fh, sprite);
    }

    fn draw_wireframe_model(&mut self, model: &[(f32, f32)], pose: Pose, pen: Pen) {
        wireframe::draw_wireframe_model(self, model, pose, pen);
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str, colour: Colour) {
        text::draw_string(self, x, y, text, colour);
    }

    fn draw_string_alpha(&mut self, x: i32, y: i32, text: &str, colour: Colour) {
        text::draw_string_alpha(self, x, y, text, colour);
    }
}
