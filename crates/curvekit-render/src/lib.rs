pub mod draw;
pub mod pipeline;
pub mod scene;

// Re-export main types
pub use draw::{draw_curve, CurveCanvas, StateGuard, AXIS_COLORS, WHITE};
pub use pipeline::{prepare_curve, DrawCall, LineBatch, LineVertex};
pub use scene::{Scene, SceneCurve};
