//! Integer Bresenham lines.

use super::{Canvas, Pen};

/// Horizontal run from `x_start` to `x_end` inclusive. Empty when `x_start > x_end`.
pub fn draw_span<C: Canvas + ?Sized>(canvas: &mut C, x_start: i32, x_end: i32, y: i32, pen: Pen) {
    for x in x_start..=x_end {
        canvas.draw(x, y, pen);
    }
}

/// Draw a line from `(x1, y1)` to `(x2, y2)`, both endpoints included.
///
/// The major axis is iterated one cell at a time from the endpoint with the smaller
/// major coordinate, so `a -> b` and `b -> a` touch the same cells. A zero-length
/// line draws its single cell.
pub fn draw_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    pen: Pen,
) {
    // Widened so off-screen endpoints far apart cannot overflow the error terms.
    let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);

    let dx = x2 - x1;
    let dy = y2 - y1;
    let dx1 = dx.abs();
    let dy1 = dy.abs();

    let mut px = 2 * dy1 - dx1;
    let mut py = 2 * dx1 - dy1;

    // Minor axis steps forward when dx and dy share a sign.
    let minor_step = if (dx < 0 && dy < 0) || (dx > 0 && dy > 0) {
        1
    } else {
        -1
    };

    if dy1 <= dx1 {
        let (mut x, mut y, x_end) = if dx >= 0 { (x1, y1, x2) } else { (x2, y2, x1) };
        canvas.draw(x as i32, y as i32, pen);

        while x < x_end {
            x += 1;
            if px < 0 {
                px += 2 * dy1;
            } else {
                y += minor_step;
                px += 2 * (dy1 - dx1);
            }
            canvas.draw(x as i32, y as i32, pen);
        }
    } else {
        let (mut x, mut y, y_end) = if dy >= 0 { (x1, y1, y2) } else { (x2, y2, y1) };
        canvas.draw(x as i32, y as i32, pen);

        while y < y_end {
            y += 1;
            if py <= 0 {
                py += 2 * dx1;
            } else {
                x += minor_step;
                py += 2 * (dx1 - dy1);
            }
            canvas.draw(x as i32, y as i32, pen);
        }
    }
}
