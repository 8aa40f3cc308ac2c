use bytemuck::{Pod, Zeroable};
use curvekit_geometry::Curve;
use curvekit_math::{Point3, Transform, Vector3};
use log::warn;

use crate::draw::{draw_curve, CurveCanvas, AXIS_COLORS, WHITE};

/// Line-list vertex with f32 data packed for GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    pub fn new(pos: Point3, color: [f32; 4]) -> Self {
        Self {
            position: [pos.x as f32, pos.y as f32, pos.z as f32],
            color,
        }
    }
}

/// A contiguous run of line-list vertices sharing one line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub first_vertex: u32,
    pub vertex_count: u32,
    pub line_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DrawState {
    color: [f32; 4],
    line_width: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            color: WHITE,
            line_width: 1.0,
        }
    }
}

/// [`CurveCanvas`] that records everything as a GPU line list.
///
/// Line strips are expanded into segment pairs so a whole scene can be
/// uploaded as a single vertex buffer.
#[derive(Debug, Clone, Default)]
pub struct LineBatch {
    vertices: Vec<LineVertex>,
    draw_calls: Vec<DrawCall>,
    state: DrawState,
    saved: Vec<DrawState>,
}

impl LineBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn draw_calls(&self) -> &[DrawCall] {
        &self.draw_calls
    }

    /// Number of unmatched `push_state` calls.
    pub fn state_depth(&self) -> usize {
        self.saved.len()
    }

    pub fn current_color(&self) -> [f32; 4] {
        self.state.color
    }

    pub fn current_line_width(&self) -> f32 {
        self.state.line_width
    }

    /// Raw bytes of the vertex buffer for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn push_segment(&mut self, a: Point3, b: Point3, color: [f32; 4]) {
        let first = self.vertices.len() as u32;
        self.vertices.push(LineVertex::new(a, color));
        self.vertices.push(LineVertex::new(b, color));

        let width = self.state.line_width;
        if let Some(call) = self.draw_calls.last_mut() {
            if call.line_width == width && call.first_vertex + call.vertex_count == first {
                call.vertex_count += 2;
                return;
            }
        }
        self.draw_calls.push(DrawCall {
            first_vertex: first,
            vertex_count: 2,
            line_width: width,
        });
    }
}

impl CurveCanvas for LineBatch {
    fn push_state(&mut self) {
        self.saved.push(self.state);
    }

    fn pop_state(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => warn!("pop_state without matching push_state"),
        }
    }

    fn set_color(&mut self, color: [f32; 4]) {
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn line_strip(&mut self, points: &[Point3]) {
        let color = self.state.color;
        for w in points.windows(2) {
            self.push_segment(w[0], w[1], color);
        }
    }

    fn axis_triad(&mut self, transform: &Transform) {
        let origin = transform.transform_point(Point3::ZERO);
        for (axis, color) in [Vector3::X, Vector3::Y, Vector3::Z].into_iter().zip(AXIS_COLORS) {
            self.push_segment(origin, transform.transform_point(axis), color);
        }
    }
}

/// Record a single curve into a fresh [`LineBatch`].
pub fn prepare_curve(curve: &Curve, frame_size: f64) -> LineBatch {
    let mut batch = LineBatch::new();
    draw_curve(&mut batch, curve, frame_size);
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use curvekit_geometry::{eval_bezier, eval_circle};
    use curvekit_math::dvec3;

    #[test]
    fn test_line_vertex_size() {
        // 3 floats (position) + 4 floats (color) = 28 bytes
        assert_eq!(std::mem::size_of::<LineVertex>(), 28);
    }

    #[test]
    fn test_strip_becomes_segment_pairs() {
        let curve = eval_circle(1.0, 6).unwrap();
        let batch = prepare_curve(&curve, 0.0);

        assert_eq!(batch.vertices().len(), 2 * 6);
        assert_eq!(batch.vertex_bytes().len(), 2 * 6 * 28);
        assert!(batch.vertices().iter().all(|v| v.color == WHITE));
        assert_eq!(
            batch.draw_calls(),
            &[DrawCall {
                first_vertex: 0,
                vertex_count: 12,
                line_width: 1.0
            }]
        );
    }

    #[test]
    fn test_triads_add_three_colored_segments_per_sample() {
        let curve = eval_circle(1.0, 4).unwrap();
        let batch = prepare_curve(&curve, 0.5);

        let strip = 2 * 4;
        assert_eq!(batch.vertices().len(), strip + 5 * 6);

        // first triad: origin at (1, 0, 0), normal axis points at the center
        let triad = &batch.vertices()[strip..strip + 6];
        assert_eq!(triad[0].color, AXIS_COLORS[0]);
        assert_eq!(triad[2].color, AXIS_COLORS[1]);
        assert_eq!(triad[4].color, AXIS_COLORS[2]);
        assert_relative_eq!(triad[0].position[0], 1.0);
        assert_relative_eq!(triad[1].position[0], 0.5);
        // binormal axis is +Z
        assert_relative_eq!(triad[3].position[2], 0.5);
    }

    #[test]
    fn test_state_is_restored() {
        let mut batch = LineBatch::new();
        batch.set_color([0.2, 0.3, 0.4, 1.0]);
        batch.set_line_width(3.0);

        let controls = [
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 1.0, 0.0),
            dvec3(2.0, 1.0, 1.0),
            dvec3(3.0, 0.0, 1.0),
        ];
        let curve = eval_bezier(&controls, 10).unwrap();
        draw_curve(&mut batch, &curve, 0.1);

        assert_eq!(batch.state_depth(), 0);
        assert_eq!(batch.current_color(), [0.2, 0.3, 0.4, 1.0]);
        assert_eq!(batch.current_line_width(), 3.0);
    }

    #[test]
    fn test_width_change_splits_draw_calls() {
        let mut batch = LineBatch::new();
        let pts = [Point3::ZERO, Point3::X, Point3::Y];
        batch.line_strip(&pts);
        batch.set_line_width(2.0);
        batch.line_strip(&pts);

        let calls = batch.draw_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].first_vertex, 4);
        assert_eq!(calls[1].line_width, 2.0);
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut batch = LineBatch::new();
        batch.set_line_width(4.0);
        batch.pop_state();
        assert_eq!(batch.current_line_width(), 4.0);
    }
}
