//! Cubic Bezier segments and piecewise Bezier evaluation.

use curvekit_core::{CurveError, Result, Tolerance};
use curvekit_math::{approx_equal_vec3, Point3, Vector3};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::ParametricCurve;
use crate::frame::{EvalOptions, FrameTracker};
use crate::sample::{Curve, CurvePoint};

/// A single cubic Bezier segment over `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub control_points: [Point3; 4],
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            control_points: [p0, p1, p2, p3],
        }
    }

    /// Bernstein-weighted position.
    pub fn position(&self, t: f64) -> Point3 {
        let [p0, p1, p2, p3] = self.control_points;
        let mt = 1.0 - t;
        mt * mt * mt * p0 + 3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t * p3
    }

    /// First derivative `dP/dt`.
    pub fn derivative(&self, t: f64) -> Vector3 {
        let [p0, p1, p2, p3] = self.control_points;
        let mt = 1.0 - t;
        3.0 * (mt * mt * (p1 - p0) + 2.0 * mt * t * (p2 - p1) + t * t * (p3 - p2))
    }

    /// Second derivative `d²P/dt²`.
    pub fn second_derivative(&self, t: f64) -> Vector3 {
        let [p0, p1, p2, p3] = self.control_points;
        6.0 * ((1.0 - t) * (p2 - 2.0 * p1 + p0) + t * (p3 - 2.0 * p2 + p1))
    }

    /// Largest distance from the first control point to any other.
    pub fn size(&self) -> f64 {
        let [p0, ..] = self.control_points;
        self.control_points
            .iter()
            .map(|p| p.distance(p0))
            .fold(0.0, f64::max)
    }

    /// Sample `steps + 1` points at `t = step / steps`, reseeding the frame
    /// at the first one.
    fn sample_into(&self, steps: usize, options: &EvalOptions, curve: &mut Curve) {
        let mut frames = FrameTracker::new(options, self.size());

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let second = self.second_derivative(t);
            let tangent = frames.tangent(self.derivative(t), second);
            let (normal, binormal) = if step == 0 {
                frames.seed(tangent, second)
            } else {
                frames.advance(tangent)
            };
            curve.push(CurvePoint::new(self.position(t), tangent, normal, binormal));
        }
    }
}

impl ParametricCurve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        self.position(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.derivative(t).normalize()
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        let [first, _, _, last] = self.control_points;
        approx_equal_vec3(first, last, Tolerance::DEFAULT_LINEAR)
    }
}

/// Sample a chain of cubic Bezier segments sharing endpoints.
///
/// `points` must hold `3n + 1` control points (`n >= 1`); segment `i` uses
/// `points[3i..=3i + 3]`. Each segment contributes `steps + 1` samples, so
/// shared endpoints appear twice.
pub fn eval_bezier(points: &[Point3], steps: usize) -> Result<Curve> {
    eval_bezier_with(points, steps, &EvalOptions::default())
}

/// [`eval_bezier`] with explicit handling of degenerate frames.
pub fn eval_bezier_with(points: &[Point3], steps: usize, options: &EvalOptions) -> Result<Curve> {
    let count = points.len();
    if count < 4 || (count - 1) % 3 != 0 {
        warn!("rejecting Bezier chain with {count} control points");
        return Err(CurveError::InvalidBezierControlPointCount { count });
    }
    if steps == 0 {
        return Err(CurveError::InvalidStepCount);
    }

    let segments = (count - 1) / 3;
    debug!("evaluating {segments} Bezier segment(s) at {steps} steps");

    let mut curve = Curve::with_capacity(segments * (steps + 1));
    for window in points.windows(4).step_by(3) {
        let segment = CubicBezier::new(window[0], window[1], window[2], window[3]);
        segment.sample_into(steps, options, &mut curve);
    }
    Ok(curve)
}
