//! Writes an HTML viewer showing a Bezier chain, a B-spline and a circle,
//! each with its moving frames.
//!
//! ```bash
//! cargo run -p curvekit-render --example curve_viewer [output.html]
//! ```

use std::path::PathBuf;
use std::process;

use curvekit_geometry::{eval_bezier, eval_bspline, eval_circle};
use curvekit_math::{dvec3, Point3};
use curvekit_render::Scene;

fn controls() -> Vec<Point3> {
    vec![
        dvec3(0.0, 0.0, 0.0),
        dvec3(1.0, 2.0, 0.5),
        dvec3(2.5, 2.0, 1.0),
        dvec3(3.0, 0.0, 1.5),
        dvec3(3.5, -2.0, 2.0),
        dvec3(5.0, -2.0, 2.5),
        dvec3(6.0, 0.0, 3.0),
    ]
}

fn main() {
    env_logger::init();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("curves.html"));

    let mut scene = Scene::new();
    let curves = [
        ("bezier", eval_bezier(&controls(), 24)),
        ("bspline", eval_bspline(&controls(), 12)),
        ("circle", eval_circle(2.0, 48)),
    ];
    for (name, curve) in curves {
        match curve {
            Ok(curve) => scene.add_curve(name, curve, 0.2),
            Err(e) => {
                eprintln!("Error evaluating {}: {}", name, e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = scene.export_html(&output) {
        eprintln!("Error writing {}: {}", output.display(), e);
        process::exit(1);
    }
    println!("Wrote {} ({} samples)", output.display(), scene.total_samples());
}
