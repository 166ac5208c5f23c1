//! Mesh summary report.

use std::path::{Path, PathBuf};

use scadkit_render::Mesh;
use serde::Serialize;

use super::output::{Output, Report};

/// Summary of a loaded mesh.
#[derive(Debug, Serialize)]
pub struct MeshReport {
    /// File the mesh was read from.
    pub path: PathBuf,
    /// Number of triangles.
    pub triangles: usize,
    /// Bounding box corners, absent for an empty mesh.
    pub bounds: Option<Bounds>,
}

/// Axis-aligned bounding box.
#[derive(Debug, Serialize)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl MeshReport {
    pub fn new(path: &Path, mesh: &Mesh) -> Self {
        Self {
            path: path.to_path_buf(),
            triangles: mesh.triangle_count(),
            bounds: mesh.bounds().map(|(min, max)| Bounds { min, max }),
        }
    }
}

fn format_point(p: &[f32; 3]) -> String {
    format!("[{}, {}, {}]", p[0], p[1], p[2])
}

impl Report for MeshReport {
    fn render(&self, out: &mut dyn Output) {
        out.title(&self.path.display().to_string());
        out.key_value("triangles", &self.triangles.to_string());
        match &self.bounds {
            Some(bounds) => {
                out.key_value("min", &format_point(&bounds.min));
                out.key_value("max", &format_point(&bounds.max));
                let size: Vec<f32> = (0..3).map(|i| bounds.max[i] - bounds.min[i]).collect();
                out.key_value("size", &format!("[{}, {}, {}]", size[0], size[1], size[2]));
            }
            None => out.warning("mesh has no triangles"),
        }
    }
}
