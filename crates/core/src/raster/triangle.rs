//! Triangle outline and scanline edge-walk fill.

use std::mem::swap;

use super::line::{draw_line, draw_span};
use super::{Canvas, Pen};

/// Three lines, `1 -> 2`, `2 -> 3`, `3 -> 1`.
#[allow(clippy::too_many_arguments)]
pub fn draw_triangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    pen: Pen,
) {
    draw_line(canvas, x1, y1, x2, y2, pen);
    draw_line(canvas, x2, y2, x3, y3, pen);
    draw_line(canvas, x3, y3, x1, y1, pen);
}

/// Bresenham-style walker for one triangle edge.
///
/// When the edge is steep (`changed`), `dx`/`dy` are swapped so the error term always
/// runs along the major axis and the walker advances exactly one scanline per step.
#[derive(Debug, Clone, Copy)]
struct Edge {
    dx: i32,
    dy: i32,
    sign: i32,
    changed: bool,
    err: i32,
}

impl Edge {
    fn new(x_from: i32, y_from: i32, x_to: i32, y_to: i32) -> Self {
        let mut dx = x_to - x_from;
        let sign = if dx < 0 { -1 } else { 1 };
        dx = dx.abs();
        let mut dy = y_to - y_from;
        let changed = dy > dx;
        if changed {
            swap(&mut dx, &mut dy);
        }
        Self {
            dx,
            dy,
            sign,
            changed,
            err: dx >> 1,
        }
    }
}

/// Filled triangle.
///
/// Vertices are sorted by ascending `y` with the fixed compare/swap order
/// `(1,2)`, `(1,3)`, `(2,3)`; edge `1 -> 3` is the long edge. The upper half walks
/// edges `1 -> 2` and `1 -> 3` for `y1..y2`, the lower half walks `2 -> 3` and the
/// continuing long edge for `y2..=y3`. Each scanline receives exactly one span.
#[allow(clippy::too_many_arguments)]
pub fn fill_triangle<C: Canvas + ?Sized>(
    canvas: &mut C,
    mut x1: i32,
    mut y1: i32,
    mut x2: i32,
    mut y2: i32,
    mut x3: i32,
    mut y3: i32,
    pen: Pen,
) {
    if y1 > y2 {
        swap(&mut y1, &mut y2);
        swap(&mut x1, &mut x2);
    }
    if y1 > y3 {
        swap(&mut y1, &mut y3);
        swap(&mut x1, &mut x3);
    }
    if y2 > y3 {
        swap(&mut y2, &mut y3);
        swap(&mut x2, &mut x3);
    }

    let mut t1x = x1;
    let mut t2x = x1;
    let mut y = y1;

    let mut e1 = Edge::new(x1, y1, x2, y2);
    let mut e2 = Edge::new(x1, y1, x3, y3);

    // Upper half; skipped for a flat-topped triangle.
    if y1 != y2 {
        let mut i = 0;
        while i < e1.dx {
            let mut t1xp = 0;
            let mut t2xp = 0;
            let mut minx = t1x.min(t2x);
            let mut maxx = t1x.max(t2x);

            // Short edge: advance until it has moved down one scanline.
            'edge1: {
                while i < e1.dx {
                    i += 1;
                    e1.err += e1.dy;
                    while e1.err >= e1.dx {
                        e1.err -= e1.dx;
                        if e1.changed {
                            t1xp = e1.sign;
                        } else {
                            break 'edge1;
                        }
                    }
                    if e1.changed {
                        break;
                    }
                    t1x += e1.sign;
                }
            }

            // Long edge.
            'edge2: loop {
                e2.err += e2.dy;
                while e2.err >= e2.dx {
                    e2.err -= e2.dx;
                    if e2.changed {
                        t2xp = e2.sign;
                    } else {
                        break 'edge2;
                    }
                }
                if e2.changed {
                    break;
                }
                t2x += e2.sign;
            }

            minx = minx.min(t1x).min(t2x);
            maxx = maxx.max(t1x).max(t2x);
            draw_span(canvas, minx, maxx, y, pen);

            if !e1.changed {
                t1x += e1.sign;
            }
            t1x += t1xp;
            if !e2.changed {
                t2x += e2.sign;
            }
            t2x += t2xp;

            y += 1;
            if y == y2 {
                break;
            }
        }
    }

    // Lower half: the short edge restarts at vertex 2, the long edge carries on.
    e1 = Edge::new(x2, y2, x3, y3);
    t1x = x2;

    let mut i = 0;
    while i <= e1.dx {
        let mut t1xp = 0;
        let mut t2xp = 0;
        let mut minx = t1x.min(t2x);
        let mut maxx = t1x.max(t2x);

        'edge1: {
            while i < e1.dx {
                e1.err += e1.dy;
                while e1.err >= e1.dx {
                    e1.err -= e1.dx;
                    if e1.changed {
                        t1xp = e1.sign;
                        break;
                    } else {
                        break 'edge1;
                    }
                }
                if e1.changed {
                    break;
                }
                t1x += e1.sign;
                if i < e1.dx {
                    i += 1;
                }
            }
        }

        'edge2: while t2x != x3 {
            e2.err += e2.dy;
            while e2.err >= e2.dx {
                e2.err -= e2.dx;
                if e2.changed {
                    t2xp = e2.sign;
                } else {
                    break 'edge2;
                }
            }
            if e2.changed {
                break;
            }
            t2x += e2.sign;
        }

        minx = minx.min(t1x).min(t2x);
        maxx = maxx.max(t1x).max(t2x);
        draw_span(canvas, minx, maxx, y, pen);

        if !e1.changed {
            t1x += e1.sign;
        }
        t1x += t1xp;
        if !e2.changed {
            t2x += e2.sign;
        }
        t2x += t2xp;

        y += 1;
        if y > y3 {
            return;
        }
        i += 1;
    }
}
