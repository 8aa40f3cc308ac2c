//! Circle curve.

use std::f64::consts::PI;

use curvekit_core::{CurveError, Result};
use curvekit_math::{dvec3, Point3, Vector3};
use log::debug;
use serde::{Deserialize, Serialize};

use super::ParametricCurve;
use crate::sample::{Curve, CurvePoint};

/// A circle about the origin in the `z = 0` plane, parameterized over
/// `[0, 2*PI]` and traversed counterclockwise seen from `+Z`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Unit normal, pointing at the center.
    pub fn normal_at(&self, t: f64) -> Vector3 {
        dvec3(-t.cos(), -t.sin(), 0.0)
    }

    /// Unit binormal, constant `+Z`.
    pub fn binormal(&self) -> Vector3 {
        Vector3::Z
    }
}

impl ParametricCurve for Circle {
    fn point_at(&self, t: f64) -> Point3 {
        self.radius * dvec3(t.cos(), t.sin(), 0.0)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        dvec3(-t.sin(), t.cos(), 0.0)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 2.0 * PI)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Sample a circle of `radius` at `steps + 1` evenly spaced angles
/// `2*PI*i/steps`; the last sample repeats the first.
pub fn eval_circle(radius: f64, steps: usize) -> Result<Curve> {
    if steps == 0 {
        return Err(CurveError::InvalidStepCount);
    }
    debug!("evaluating circle of radius {radius} at {steps} steps");

    let circle = Circle::new(radius);
    Ok((0..=steps)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / steps as f64;
            CurvePoint::new(
                circle.point_at(t),
                circle.tangent_at(t),
                circle.normal_at(t),
                circle.binormal(),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvekit_core::Validate;

    #[test]
    fn test_circle_points_on_circle() {
        let circle = Circle::new(1.0);
        for i in 0..8 {
            let t = i as f64 * PI / 4.0;
            let p = circle.point_at(t);
            let dist = p.length();
            assert!(
                (dist - 1.0).abs() < 1e-10,
                "Point at t={} not on circle: dist={}",
                t,
                dist
            );
            assert!(p.z.abs() < 1e-10, "Point not in XY plane");
        }
    }

    #[test]
    fn test_circle_tangent_perpendicular() {
        let circle = Circle::new(1.0);
        for i in 0..8 {
            let t = i as f64 * PI / 4.0;
            let p = circle.point_at(t);
            let tang = circle.tangent_at(t);
            // Tangent should be perpendicular to radius vector
            let dot = p.dot(tang);
            assert!(
                dot.abs() < 1e-10,
                "Tangent not perpendicular at t={}: dot={}",
                t,
                dot
            );
        }
    }

    #[test]
    fn test_circle_is_closed() {
        let circle = Circle::new(1.0);
        assert!(circle.is_closed());
        let (a, b) = circle.domain();
        assert!((a - 0.0).abs() < 1e-10);
        assert!((b - 2.0 * PI).abs() < 1e-10);
    }

    #[test]
    fn test_eval_circle_cardinal_points() {
        let curve = eval_circle(2.0, 4).unwrap();
        assert_eq!(curve.len(), 5);

        let expected = [
            dvec3(2.0, 0.0, 0.0),
            dvec3(0.0, 2.0, 0.0),
            dvec3(-2.0, 0.0, 0.0),
            dvec3(0.0, -2.0, 0.0),
            dvec3(2.0, 0.0, 0.0),
        ];
        for (sample, want) in curve.iter().zip(expected) {
            assert!((sample.position - want).length() < 1e-9);
        }
        assert_eq!(curve[0].position, dvec3(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_eval_circle_frames() {
        let curve = eval_circle(3.5, 16).unwrap();
        curve.validate().unwrap();
        for p in &curve {
            // normal points at the center
            assert!((p.normal + p.position / 3.5).length() < 1e-12);
            assert_eq!(p.binormal, Vector3::Z);
        }
    }

    #[test]
    fn test_eval_circle_zero_steps() {
        assert!(matches!(eval_circle(1.0, 0), Err(CurveError::InvalidStepCount)));
    }
}
