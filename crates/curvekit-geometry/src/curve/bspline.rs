//! Uniform cubic B-splines, evaluated through their Bezier form.

use curvekit_core::{CurveError, Result};
use curvekit_math::{DMat4, DVec4, Point3};
use log::{debug, warn};

use super::bezier::eval_bezier_with;
use crate::frame::EvalOptions;
use crate::sample::Curve;

/// Uniform cubic B-spline to Bezier basis change.
///
/// Row `i` yields Bezier control point `i` from four consecutive B-spline
/// control points:
///
/// ```text
///       | 1 4 1 0 |
/// 1/6 * | 0 4 2 0 |
///       | 0 2 4 0 |
///       | 0 1 4 1 |
/// ```
pub const BSPLINE_TO_BEZIER: DMat4 = DMat4::from_cols_array(&[
    1.0 / 6.0, 0.0, 0.0, 0.0, // column 0
    4.0 / 6.0, 4.0 / 6.0, 2.0 / 6.0, 1.0 / 6.0, // column 1
    1.0 / 6.0, 2.0 / 6.0, 4.0 / 6.0, 4.0 / 6.0, // column 2
    0.0, 0.0, 0.0, 1.0 / 6.0, // column 3
]);

/// Convert one window of four B-spline control points to Bezier control points.
///
/// The points are stacked as homogeneous rows `(x, y, z, 1)`, multiplied by
/// [`BSPLINE_TO_BEZIER`], and the rows of the product are read back as 3D
/// points. Every row of the matrix sums to one, so `w` stays 1.
pub fn bspline_to_bezier(window: [Point3; 4]) -> [Point3; 4] {
    let [p0, p1, p2, p3] = window;
    let geometry = DMat4::from_cols(
        DVec4::new(p0.x, p1.x, p2.x, p3.x),
        DVec4::new(p0.y, p1.y, p2.y, p3.y),
        DVec4::new(p0.z, p1.z, p2.z, p3.z),
        DVec4::ONE,
    );
    let bezier = BSPLINE_TO_BEZIER * geometry;

    [0, 1, 2, 3].map(|i| bezier.row(i).truncate())
}

/// Sample a uniform cubic B-spline.
///
/// Every run of four consecutive control points is one segment, so `count`
/// points give `count - 3` segments of `steps + 1` samples each. Segment
/// boundaries are not deduplicated.
pub fn eval_bspline(points: &[Point3], steps: usize) -> Result<Curve> {
    eval_bspline_with(points, steps, &EvalOptions::default())
}

/// [`eval_bspline`] with explicit handling of degenerate frames.
pub fn eval_bspline_with(points: &[Point3], steps: usize, options: &EvalOptions) -> Result<Curve> {
    let count = points.len();
    if count < 4 {
        warn!("rejecting B-spline with {count} control points");
        return Err(CurveError::InvalidBsplineControlPointCount { count });
    }
    if steps == 0 {
        return Err(CurveError::InvalidStepCount);
    }

    let segments = count - 3;
    debug!("evaluating {segments} B-spline segment(s) at {steps} steps");

    let mut curve = Curve::with_capacity(segments * (steps + 1));
    for window in points.windows(4) {
        let bezier = bspline_to_bezier([window[0], window[1], window[2], window[3]]);
        curve.append(eval_bezier_with(&bezier, steps, options)?);
    }
    Ok(curve)
}
