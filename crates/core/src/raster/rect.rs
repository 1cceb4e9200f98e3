//! Axis-aligned rectangles.
//!
//! Sizes are offsets from `(x, y)` and both routines treat them as inclusive: a
//! rectangle of size `(sx, sy)` covers `[x, x + sx] x [y, y + sy]`, so the outline is
//! exactly the border of the fill. Negative sizes draw nothing.

use super::{Canvas, Pen};

pub fn draw_rectangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    size_x: i32,
    size_y: i32,
    pen: Pen,
) {
    if size_x < 0 || size_y < 0 {
        return;
    }
    for i in 0..=size_x {
        canvas.draw(x + i, y, pen);
        canvas.draw(x + i, y + size_y, pen);
    }
    for j in 0..=size_y {
        canvas.draw(x, y + j, pen);
        canvas.draw(x + size_x, y + j, pen);
    }
}

pub fn fill_rectangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    size_x: i32,
    size_y: i32,
    pen: Pen,
) {
    for i in 0..=size_x {
        for j in 0..=size_y {
            canvas.draw(x + i, y + j, pen);
        }
    }
}
