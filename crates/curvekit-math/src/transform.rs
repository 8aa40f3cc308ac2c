use crate::{DMat4, DVec4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine transform stored column-major, as handed to a drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn from_scale(s: f64) -> Self {
        Self::from_mat4(DMat4::from_scale(Vector3::splat(s)))
    }

    /// Map local x/y/z onto the given axes and the local origin onto `origin`.
    pub fn from_frame(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3, origin: Point3) -> Self {
        Self::from_mat4(DMat4::from_cols(
            x_axis.extend(0.0),
            y_axis.extend(0.0),
            z_axis.extend(0.0),
            DVec4::new(origin.x, origin.y, origin.z, 1.0),
        ))
    }

    fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    /// Apply `self` first, then `other`.
    pub fn then(&self, other: &Transform) -> Transform {
        Self::from_mat4(other.to_mat4() * self.to_mat4())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec3;

    #[test]
    fn test_frame_maps_axes() {
        // x -> Y, y -> Z, z -> X, placed at (1, 2, 3)
        let t = Transform::from_frame(Vector3::Y, Vector3::Z, Vector3::X, dvec3(1.0, 2.0, 3.0));

        let tip = t.transform_point(dvec3(1.0, 0.0, 0.0));
        assert_relative_eq!(tip.x, 1.0);
        assert_relative_eq!(tip.y, 3.0);
        assert_relative_eq!(tip.z, 3.0);

        let tip = t.transform_point(dvec3(0.0, 0.0, 1.0));
        assert!((tip - dvec3(2.0, 2.0, 3.0)).length() < 1e-12);
    }

    #[test]
    fn test_scale_then_frame() {
        let frame = Transform::from_frame(Vector3::X, Vector3::Y, Vector3::Z, dvec3(5.0, 0.0, 0.0));
        let t = Transform::from_scale(0.5).then(&frame);
        let p = t.transform_point(dvec3(0.0, 2.0, 0.0));
        assert!((p - dvec3(5.0, 1.0, 0.0)).length() < 1e-12);
    }
}
