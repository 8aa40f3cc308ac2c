//! Frame propagation along a sampled segment.

use curvekit_core::Tolerance;
use curvekit_math::Vector3;
use log::trace;
use serde::{Deserialize, Serialize};

/// What to do when a frame vector cannot be derived from a cross product,
/// e.g. on a straight segment or where consecutive tangents are parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DegenerateFramePolicy {
    /// Normalize the raw cross product anyway. A zero-length result
    /// becomes a NaN frame.
    Propagate,
    /// Keep the previous normal of the segment, or pick any vector
    /// perpendicular to the tangent when there is none.
    #[default]
    Fallback,
}

/// Options shared by the Bezier and B-spline evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvalOptions {
    pub degenerate_frames: DegenerateFramePolicy,
    /// `linear` scales with the segment: a derivative shorter than
    /// `linear * size` counts as zero. `angular` bounds the sine below
    /// which two unit vectors count as parallel.
    pub tolerance: Tolerance,
}

impl EvalOptions {
    pub fn propagate() -> Self {
        Self {
            degenerate_frames: DegenerateFramePolicy::Propagate,
            ..Self::default()
        }
    }
}

/// Running state of one segment's sampling loop.
///
/// The first sample seeds the frame from the second derivative; every later
/// sample derives its normal from the previous and current tangents.
#[derive(Debug)]
pub(crate) struct FrameTracker {
    policy: DegenerateFramePolicy,
    /// Shortest derivative that still has a direction.
    min_length: f64,
    min_sine: f64,
    prev_tangent: Option<Vector3>,
    prev_normal: Option<Vector3>,
}

impl FrameTracker {
    /// `size` is the extent of the segment's control polygon, so that
    /// degeneracy tests do not depend on the curve's scale.
    pub(crate) fn new(options: &EvalOptions, size: f64) -> Self {
        Self {
            policy: options.degenerate_frames,
            min_length: options.tolerance.linear * size,
            min_sine: options.tolerance.angular,
            prev_tangent: None,
            prev_normal: None,
        }
    }

    /// Unit tangent from the first derivative.
    ///
    /// Under `Fallback` a vanishing derivative (coincident control points)
    /// borrows the direction of the second derivative, then the previous
    /// tangent.
    pub(crate) fn tangent(&self, derivative: Vector3, second_derivative: Vector3) -> Vector3 {
        match self.policy {
            DegenerateFramePolicy::Propagate => derivative.normalize(),
            DegenerateFramePolicy::Fallback => self
                .direction(derivative)
                .or_else(|| self.direction(second_derivative))
                .or(self.prev_tangent)
                .unwrap_or(Vector3::X),
        }
    }

    /// Normal and binormal for the first sample of a segment.
    pub(crate) fn seed(&mut self, tangent: Vector3, second_derivative: Vector3) -> (Vector3, Vector3) {
        let raw = match self.policy {
            DegenerateFramePolicy::Propagate => tangent.cross(second_derivative),
            DegenerateFramePolicy::Fallback => self
                .direction(second_derivative)
                .map_or(Vector3::ZERO, |d| tangent.cross(d)),
        };
        self.next_frame(tangent, raw)
    }

    /// Normal and binormal for any later sample.
    pub(crate) fn advance(&mut self, tangent: Vector3) -> (Vector3, Vector3) {
        let raw = match self.prev_tangent {
            Some(prev) => prev.cross(tangent),
            None => Vector3::ZERO,
        };
        self.next_frame(tangent, raw)
    }

    /// `raw_normal` is a cross product of unit vectors (or zero).
    fn next_frame(&mut self, tangent: Vector3, raw_normal: Vector3) -> (Vector3, Vector3) {
        let normal = match self.policy {
            DegenerateFramePolicy::Propagate => raw_normal.normalize(),
            DegenerateFramePolicy::Fallback if raw_normal.length() > self.min_sine => {
                raw_normal.normalize()
            }
            DegenerateFramePolicy::Fallback => self.fallback_normal(tangent),
        };
        let binormal = tangent.cross(normal).normalize();

        self.prev_tangent = Some(tangent);
        self.prev_normal = Some(normal);
        (normal, binormal)
    }

    fn fallback_normal(&self, tangent: Vector3) -> Vector3 {
        trace!("degenerate frame, substituting a normal");
        self.prev_normal
            .and_then(|n| (n - tangent * n.dot(tangent)).try_normalize())
            .unwrap_or_else(|| perpendicular(tangent))
    }

    /// Unit direction of a derivative, if it is long enough to have one.
    fn direction(&self, v: Vector3) -> Option<Vector3> {
        let length = v.length();
        if length.is_finite() && length > self.min_length {
            Some(v / length)
        } else {
            None
        }
    }
}

/// Some unit vector perpendicular to the unit vector `v`.
fn perpendicular(v: Vector3) -> Vector3 {
    // Choose a reference axis far from v
    let reference = if v.x.abs() < 0.9 { Vector3::X } else { Vector3::Y };
    v.cross(reference).normalize()
}
