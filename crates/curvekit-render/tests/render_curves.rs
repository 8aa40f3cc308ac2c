use curvekit_geometry::{eval_bezier, eval_bspline, eval_circle};
use curvekit_math::{dvec3, Point3};
use curvekit_render::{draw_curve, prepare_curve, CurveCanvas, LineBatch, Scene, AXIS_COLORS};

fn s_curve() -> Vec<Point3> {
    vec![
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 2.0, 0.0),
        dvec3(2.0, 2.0, 1.0),
        dvec3(3.0, 0.0, 1.0),
        dvec3(4.0, -2.0, 1.0),
        dvec3(5.0, -2.0, 0.0),
        dvec3(6.0, 0.0, 0.0),
    ]
}

#[test]
fn test_strip_follows_sample_positions() {
    let curve = eval_bezier(&s_curve(), 12).unwrap();
    let batch = prepare_curve(&curve, 0.0);

    let verts = batch.vertices();
    assert_eq!(verts.len(), 2 * (curve.len() - 1));
    for (i, pair) in verts.chunks(2).enumerate() {
        let a = curve[i].position;
        let b = curve[i + 1].position;
        assert_eq!(pair[0].position, [a.x as f32, a.y as f32, a.z as f32]);
        assert_eq!(pair[1].position, [b.x as f32, b.y as f32, b.z as f32]);
    }
}

#[test]
fn test_triad_axes_follow_frame() {
    let curve = eval_bspline(&s_curve(), 5).unwrap();
    let size = 0.2;
    let batch = prepare_curve(&curve, size);

    let strip = 2 * (curve.len() - 1);
    let triads = &batch.vertices()[strip..];
    assert_eq!(triads.len(), 6 * curve.len());

    for (sample, triad) in curve.iter().zip(triads.chunks(6)) {
        let axes = [sample.normal, sample.binormal, sample.tangent];
        for (k, axis) in axes.iter().enumerate() {
            let start = triad[2 * k].position;
            let end = triad[2 * k + 1].position;
            let drawn = dvec3(
                (end[0] - start[0]) as f64,
                (end[1] - start[1]) as f64,
                (end[2] - start[2]) as f64,
            );
            assert!((drawn - *axis * size).length() < 1e-5);
            assert_eq!(triad[2 * k].color, AXIS_COLORS[k]);
        }
    }
}

#[test]
fn test_caller_state_survives_drawing() {
    let mut batch = LineBatch::new();
    batch.push_state();
    batch.set_color([0.5, 0.5, 0.5, 1.0]);

    draw_curve(&mut batch, &eval_circle(1.0, 12).unwrap(), 0.3);
    assert_eq!(batch.state_depth(), 1);
    assert_eq!(batch.current_color(), [0.5, 0.5, 0.5, 1.0]);

    batch.pop_state();
    assert_eq!(batch.state_depth(), 0);
}

#[test]
fn test_scene_batch_matches_individual_batches() {
    let circle = eval_circle(2.0, 16).unwrap();
    let spline = eval_bspline(&s_curve(), 4).unwrap();

    let mut scene = Scene::new();
    scene.add_curve("circle", circle.clone(), 0.25);
    scene.add_curve("spline", spline.clone(), 0.0);

    let expected = prepare_curve(&circle, 0.25).vertices().len()
        + prepare_curve(&spline, 0.0).vertices().len();
    assert_eq!(scene.to_line_batch().vertices().len(), expected);
}
