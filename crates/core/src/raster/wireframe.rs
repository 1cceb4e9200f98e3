//! Wireframe models: 2D vertex lists drawn as closed polygons under a pose.

use super::line::draw_line;
use super::{Canvas, Pen};

/// Placement of a model: rotate by `rotation` radians, scale by `scale`, then
/// translate to `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
    pub scale: f32,
}

impl Pose {
    pub const fn new(x: f32, y: f32, rotation: f32, scale: f32) -> Self {
        Self {
            x,
            y,
            rotation,
            scale,
        }
    }

    /// Unrotated, unscaled placement at `(x, y)`.
    pub const fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    /// Map one model-space vertex into canvas space.
    pub fn apply(&self, (mx, my): (f32, f32)) -> (f32, f32) {
        let (sin, cos) = self.rotation.sin_cos();
        self.apply_with(mx, my, sin, cos)
    }

    #[inline]
    fn apply_with(&self, mx: f32, my: f32, sin: f32, cos: f32) -> (f32, f32) {
        let rx = mx * cos - my * sin;
        let ry = mx * sin + my * cos;
        (rx * self.scale + self.x, ry * self.scale + self.y)
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

/// Draw `model` as a closed polygon: vertex `i` joins vertex `(i + 1) % n`, including
/// the edge from the last vertex back to the first. Transformed coordinates are
/// truncated toward zero. An empty model draws nothing.
pub fn draw_wireframe_model<C: Canvas + ?Sized>(
    canvas: &mut C,
    model: &[(f32, f32)],
    pose: Pose,
    pen: Pen,
) {
    let n = model.len();
    if n == 0 {
        return;
    }

    let (sin, cos) = pose.rotation.sin_cos();
    let project = |(mx, my): (f32, f32)| {
        let (x, y) = pose.apply_with(mx, my, sin, cos);
        (x as i32, y as i32)
    };

    let first = project(model[0]);
    let mut from = first;
    for i in 0..n {
        let to = if i + 1 == n {
            first
        } else {
            project(model[i + 1])
        };
        draw_line(canvas, from.0, from.1, to.0, to.1, pen);
        from = to;
    }
}
