pub mod aabb;
pub mod transform;

pub use glam::{dvec3, DMat3, DMat4, DVec3, DVec4};
pub use aabb::Aabb3;
pub use transform::Transform;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Approximate equality of two points: squared distance below `eps`.
pub fn approx_equal_vec3(a: Point3, b: Point3, eps: f64) -> bool {
    (a - b).length_squared() < eps
}
