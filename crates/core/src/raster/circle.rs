//! Midpoint circle outline and fill.
//!
//! Both routines walk one octant with the integer decision variable `p = 3 - 2r`
//! and mirror it: the outline plots 8 symmetric points per step, the fill turns the
//! 4 mirrored point pairs into horizontal spans.

use super::line::draw_span;
use super::{Canvas, Pen};

/// Advance the octant walk by one step.
#[inline(always)]
fn step(x1: &mut i64, y1: &mut i64, p: &mut i64) {
    if *p < 0 {
        *p += 4 * *x1 + 6;
    } else {
        *p += 4 * (*x1 - *y1) + 10;
        *y1 -= 1;
    }
    *x1 += 1;
}

/// Draw one cell given widened coordinates; cells beyond the `i32` range are dropped.
#[inline(always)]
fn plot<C: Canvas + ?Sized>(canvas: &mut C, x: i64, y: i64, pen: Pen) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        canvas.draw(x, y, pen);
    }
}

/// Span with widened coordinates, trimmed to the `i32` range.
#[inline(always)]
fn span<C: Canvas + ?Sized>(canvas: &mut C, x_start: i64, x_end: i64, y: i64, pen: Pen) {
    let (min, max) = (i64::from(i32::MIN), i64::from(i32::MAX));
    let Ok(y) = i32::try_from(y) else { return };
    if x_end < min || x_start > max {
        return;
    }
    draw_span(canvas, x_start.max(min) as i32, x_end.min(max) as i32, y, pen);
}

/// Circle outline centred on `(x, y)`. No-op when `radius <= 0`.
pub fn draw_circle<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, radius: i32, pen: Pen) {
    if radius <= 0 {
        return;
    }
    // Widened so radii and centres near the i32 limits cannot overflow.
    let (x, y) = (i64::from(x), i64::from(y));

    let mut x1 = 0;
    let mut y1 = i64::from(radius);
    let mut p = 3 - 2 * y1;

    while y1 >= x1 {
        plot(canvas, x - x1, y - y1, pen);
        plot(canvas, x - y1, y - x1, pen);
        plot(canvas, x + y1, y - x1, pen);
        plot(canvas, x + x1, y - y1, pen);
        plot(canvas, x - x1, y + y1, pen);
        plot(canvas, x - y1, y + x1, pen);
        plot(canvas, x + y1, y + x1, pen);
        plot(canvas, x + x1, y + y1, pen);

        step(&mut x1, &mut y1, &mut p);
    }
}

/// Filled circle centred on `(x, y)`. No-op when `radius <= 0`.
pub fn fill_circle<C: Canvas + ?Sized>(canvas: &mut C, x: i32, y: i32, radius: i32, pen: Pen) {
    if radius <= 0 {
        return;
    }
    let (x, y) = (i64::from(x), i64::from(y));

    let mut x1 = 0;
    let mut y1 = i64::from(radius);
    let mut p = 3 - 2 * y1;

    while y1 >= x1 {
        span(canvas, x - x1, x + x1, y - y1, pen);
        span(canvas, x - y1, x + y1, y - x1, pen);
        span(canvas, x - x1, x + x1, y + y1, pen);
        span(canvas, x - y1, x + y1, y + x1, pen);

        step(&mut x1, &mut y1, &mut p);
    }
}
