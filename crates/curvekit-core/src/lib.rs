pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{CurveError, Result};
pub use tolerance::{approx_equal, Tolerance};
pub use traits::{BoundingBox, Validate};
