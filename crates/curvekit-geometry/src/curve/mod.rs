//! Parametric curve types and the evaluators that sample them.

mod bezier;
mod bspline;
mod circle;

use curvekit_math::{Point3, Vector3};

pub use bezier::{eval_bezier, eval_bezier_with, CubicBezier};
pub use bspline::{bspline_to_bezier, eval_bspline, eval_bspline_with, BSPLINE_TO_BEZIER};
pub use circle::{eval_circle, Circle};

/// Trait for parametric curves in 3D space.
pub trait ParametricCurve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Unit tangent at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
