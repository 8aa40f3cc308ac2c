use std::io::Write;
use std::path::Path;

use curvekit_core::{BoundingBox, Result};
use curvekit_geometry::Curve;
use curvekit_math::{Aabb3, DVec3, Point3};
use log::info;
use serde::Serialize;

use crate::draw::draw_curve;
use crate::pipeline::LineBatch;

/// A named curve in the scene, drawn with axis triads of `frame_size`.
#[derive(Debug, Clone, Serialize)]
pub struct SceneCurve {
    pub name: String,
    pub curve: Curve,
    pub frame_size: f64,
}

/// A set of curves for visualization
#[derive(Debug, Clone, Default, Serialize)]
pub struct Scene {
    pub curves: Vec<SceneCurve>,
}

/// Flattened line-list data handed to the HTML viewer.
#[derive(Serialize)]
struct LineData {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_curve(&mut self, name: &str, curve: Curve, frame_size: f64) {
        self.curves.push(SceneCurve {
            name: name.to_string(),
            curve,
            frame_size,
        });
    }

    /// Compute scene bounding box
    pub fn bounds(&self) -> Option<Aabb3> {
        self.curves
            .iter()
            .filter_map(|c| c.curve.bounding_box())
            .reduce(|a, b| a.merge(&b))
    }

    /// Total sample count across all curves
    pub fn total_samples(&self) -> usize {
        self.curves.iter().map(|c| c.curve.len()).sum()
    }

    /// Draw every curve into one line batch.
    pub fn to_line_batch(&self) -> LineBatch {
        let mut batch = LineBatch::new();
        for scene_curve in &self.curves {
            draw_curve(&mut batch, &scene_curve.curve, scene_curve.frame_size);
        }
        batch
    }

    /// Serialize the scene (names, frame sizes and every sample) as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Export the scene as a standalone HTML file with an embedded Three.js viewer.
    pub fn export_html(&self, path: &Path) -> Result<()> {
        let bounds = self
            .bounds()
            .unwrap_or_else(|| Aabb3::new(Point3::ZERO, DVec3::splat(1.0)));
        let center = bounds.center();
        let camera_distance = (bounds.extents().length() * 1.5).max(1.0);

        let batch = self.to_line_batch();
        let data = LineData {
            positions: batch.vertices().iter().flat_map(|v| v.position).collect(),
            colors: batch.vertices().iter().flat_map(|v| v.color[..3].to_vec()).collect(),
        };
        let data_json = serde_json::to_string(&data).map_err(std::io::Error::from)?;

        let mut file = std::fs::File::create(path)?;

        write!(
            file,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>curvekit Scene Viewer</title>
    <style>
        body {{ margin: 0; overflow: hidden; background: #1a1a1a; font-family: sans-serif; }}
        #info {{
            position: absolute; top: 10px; left: 10px;
            background: rgba(0, 0, 0, 0.7); color: white;
            padding: 12px; border-radius: 5px; font-size: 13px;
        }}
    </style>
</head>
<body>
    <div id="info">
        <div>Curves: {}</div>
        <div>Samples: {}</div>
"#,
            self.curves.len(),
            self.total_samples()
        )?;

        for scene_curve in &self.curves {
            writeln!(
                file,
                "        <div>{} &middot; {} samples</div>",
                html_escape(&scene_curve.name),
                scene_curve.curve.len()
            )?;
        }

        write!(
            file,
            r#"    </div>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js"></script>
    <script>
        const lineData = {data_json};

        const scene = new THREE.Scene();
        const camera = new THREE.PerspectiveCamera(60, window.innerWidth / window.innerHeight, 0.01, 10000);
        const renderer = new THREE.WebGLRenderer({{ antialias: true }});
        renderer.setSize(window.innerWidth, window.innerHeight);
        document.body.appendChild(renderer.domElement);

        const geometry = new THREE.BufferGeometry();
        geometry.setAttribute('position', new THREE.Float32BufferAttribute(lineData.positions, 3));
        geometry.setAttribute('color', new THREE.Float32BufferAttribute(lineData.colors, 3));
        scene.add(new THREE.LineSegments(geometry, new THREE.LineBasicMaterial({{ vertexColors: true }})));

        const center = new THREE.Vector3({cx:.4}, {cy:.4}, {cz:.4});
        let theta = Math.PI / 4, phi = Math.PI / 3, radius = {distance:.4};
        function updateCamera() {{
            camera.position.set(
                center.x + radius * Math.sin(phi) * Math.cos(theta),
                center.y + radius * Math.sin(phi) * Math.sin(theta),
                center.z + radius * Math.cos(phi));
            camera.up.set(0, 0, 1);
            camera.lookAt(center);
        }}
        let dragging = false, last = {{ x: 0, y: 0 }};
        renderer.domElement.addEventListener('mousedown', e => {{ dragging = true; last = {{ x: e.clientX, y: e.clientY }}; }});
        renderer.domElement.addEventListener('mouseup', () => {{ dragging = false; }});
        renderer.domElement.addEventListener('mousemove', e => {{
            if (!dragging) return;
            theta -= (e.clientX - last.x) * 0.01;
            phi = Math.max(0.1, Math.min(Math.PI - 0.1, phi - (e.clientY - last.y) * 0.01));
            last = {{ x: e.clientX, y: e.clientY }};
            updateCamera();
        }});
        renderer.domElement.addEventListener('wheel', e => {{
            e.preventDefault();
            radius = Math.max(0.1, radius * (1 + e.deltaY * 0.001));
            updateCamera();
        }});
        window.addEventListener('resize', () => {{
            camera.aspect = window.innerWidth / window.innerHeight;
            camera.updateProjectionMatrix();
            renderer.setSize(window.innerWidth, window.innerHeight);
        }});
        updateCamera();
        (function animate() {{ requestAnimationFrame(animate); renderer.render(scene, camera); }})();
    </script>
</body>
</html>
"#,
            cx = center.x,
            cy = center.y,
            cz = center.z,
            distance = camera_distance,
        )?;

        info!(
            "exported {} curve(s), {} line vertices to {}",
            self.curves.len(),
            batch.vertices().len(),
            path.display()
        );
        Ok(())
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
