//! Backend-independent drawing of sampled curves.

use std::ops::{Deref, DerefMut};

use curvekit_geometry::Curve;
use curvekit_math::{Point3, Transform};

pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Colors of the triad axes: x (normal) red, y (binormal) green, z (tangent) blue.
pub const AXIS_COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

/// The drawing surface a curve is rendered onto.
///
/// Color and line width are state that `push_state`/`pop_state` save and
/// restore.
pub trait CurveCanvas {
    fn push_state(&mut self);
    fn pop_state(&mut self);
    fn set_color(&mut self, color: [f32; 4]);
    fn set_line_width(&mut self, width: f32);

    /// One connected polyline through `points`.
    fn line_strip(&mut self, points: &[Point3]);

    /// Three unit segments from the local origin along local x, y and z,
    /// mapped through `transform` and colored with [`AXIS_COLORS`].
    fn axis_triad(&mut self, transform: &Transform);
}

/// Saves canvas state on creation and restores it when dropped.
pub struct StateGuard<'a, C: CurveCanvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: CurveCanvas + ?Sized> StateGuard<'a, C> {
    pub fn new(canvas: &'a mut C) -> Self {
        canvas.push_state();
        Self { canvas }
    }
}

impl<C: CurveCanvas + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: CurveCanvas + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: CurveCanvas + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.canvas.pop_state();
    }
}

/// Draw `curve` as a white line strip and, when `frame_size` is non-zero,
/// an axis triad of that size at every sample (red = normal,
/// green = binormal, blue = tangent).
///
/// Canvas state is left as it was found.
pub fn draw_curve<C: CurveCanvas + ?Sized>(canvas: &mut C, curve: &Curve, frame_size: f64) {
    let mut canvas = StateGuard::new(canvas);

    canvas.set_color(WHITE);
    canvas.set_line_width(1.0);
    let positions: Vec<Point3> = curve.positions().collect();
    canvas.line_strip(&positions);

    if frame_size != 0.0 {
        let scale = Transform::from_scale(frame_size);
        for sample in curve {
            canvas.axis_triad(&scale.then(&sample.frame_transform()));
        }
    }
}
