/// Tolerance management for curve sampling and frame checks.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Relative tolerance for lengths, as a fraction of the segment's size
    pub linear: f64,
    /// Angular tolerance (in radians), applied to the sine of the angle
    /// between two unit vectors
    pub angular: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_ANGULAR: f64 = 1e-10;

    /// Allowed deviation of a frame vector's length from 1.
    pub const FRAME_EPSILON: f64 = 1e-5;

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            angular: Self::DEFAULT_ANGULAR,
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

/// Approximate equality of two scalars: `|a - b| < eps`.
pub fn approx_equal(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
