//! Sampled curves: positions with a moving (tangent, normal, binormal) frame.

use std::ops::Index;

use curvekit_core::{BoundingBox, CurveError, Result, Tolerance, Validate};
use curvekit_math::{Aabb3, Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};

/// One sample of a curve.
///
/// `tangent`, `normal` and `binormal` form a right-handed orthonormal frame
/// (`tangent × normal = binormal`) unless the sample is degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub position: Point3,
    pub tangent: Vector3,
    pub normal: Vector3,
    pub binormal: Vector3,
}

impl CurvePoint {
    pub fn new(position: Point3, tangent: Vector3, normal: Vector3, binormal: Vector3) -> Self {
        Self {
            position,
            tangent,
            normal,
            binormal,
        }
    }

    /// Local x/y/z mapped onto normal/binormal/tangent, origin onto the position.
    pub fn frame_transform(&self) -> Transform {
        Transform::from_frame(self.normal, self.binormal, self.tangent, self.position)
    }

    /// True when any frame vector is non-finite or has (near) zero length.
    pub fn is_degenerate(&self) -> bool {
        [self.tangent, self.normal, self.binormal]
            .iter()
            .any(|v| !v.is_finite() || v.length() < Tolerance::DEFAULT_LINEAR)
    }

    fn check_frame(&self, index: usize) -> Result<()> {
        if !self.position.is_finite() || self.is_degenerate() {
            return Err(CurveError::DegenerateFrame { index });
        }

        let eps = Tolerance::FRAME_EPSILON;
        let unit = |v: Vector3| (v.length() - 1.0).abs() < eps;
        let orthogonal = |a: Vector3, b: Vector3| a.dot(b).abs() < eps;

        let ok = unit(self.tangent)
            && unit(self.normal)
            && unit(self.binormal)
            && orthogonal(self.tangent, self.normal)
            && orthogonal(self.tangent, self.binormal)
            && orthogonal(self.normal, self.binormal)
            && self.tangent.cross(self.normal).dot(self.binormal) > 0.0;

        if ok {
            Ok(())
        } else {
            Err(CurveError::NonOrthonormalFrame { index })
        }
    }
}

impl Validate for CurvePoint {
    fn validate(&self) -> Result<()> {
        self.check_frame(0)
    }
}

/// An ordered run of samples in traversal order.
///
/// Evaluators build a fresh `Curve` per call; afterwards it is read-only.
/// Adjacent samples may coincide where segments meet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, point: CurvePoint) {
        self.points.push(point);
    }

    pub(crate) fn append(&mut self, mut other: Curve) {
        self.points.append(&mut other.points);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CurvePoint> {
        self.points.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    pub fn first(&self) -> Option<&CurvePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Sum of the distances between consecutive samples.
    pub fn polyline_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position))
            .sum()
    }

    /// Number of samples whose frame is degenerate.
    pub fn degenerate_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_degenerate()).count()
    }
}

impl FromIterator<CurvePoint> for Curve {
    fn from_iter<I: IntoIterator<Item = CurvePoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a CurvePoint;
    type IntoIter = std::slice::Iter<'a, CurvePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Index<usize> for Curve {
    type Output = CurvePoint;

    fn index(&self, index: usize) -> &CurvePoint {
        &self.points[index]
    }
}

impl Validate for Curve {
    fn validate(&self) -> Result<()> {
        self.points
            .iter()
            .enumerate()
            .try_for_each(|(i, p)| p.check_frame(i))
    }
}

impl BoundingBox for Curve {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.positions())
    }
}
