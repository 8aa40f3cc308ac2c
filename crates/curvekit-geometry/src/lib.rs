//! curvekit geometry: Bezier, B-spline and circle evaluation into sampled
//! curves carrying a (tangent, normal, binormal) frame at every sample.

pub mod curve;
pub mod frame;
pub mod sample;

pub use curve::{
    bspline_to_bezier, eval_bezier, eval_bezier_with, eval_bspline, eval_bspline_with,
    eval_circle, Circle, CubicBezier, ParametricCurve, BSPLINE_TO_BEZIER,
};
pub use frame::{DegenerateFramePolicy, EvalOptions};
pub use sample::{Curve, CurvePoint};
