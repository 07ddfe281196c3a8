//! Wavefront OBJ mesh source.
//!
//! Produces fully populated [`TriangleMesh`] values for the pipeline. Every
//! object in the file is merged into one mesh; faces are triangulated on load.
//! Per-vertex colors are read when the file carries them (`v x y z r g b`),
//! otherwise every vertex gets [`DEFAULT_VERTEX_COLOR`].

use std::path::Path;

use thiserror::Error;

use crate::colors::Color;
use crate::math::Vec3;
use crate::mesh::{TriangleMesh, Vertex};

pub const DEFAULT_VERTEX_COLOR: Color = Color::rgb(180, 180, 180);

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("OBJ file contains no triangles")]
    Empty,
    #[error("face references vertex {index} but only {count} vertices exist")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Loads an OBJ file into a single mesh whose center is the vertex centroid.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<TriangleMesh, LoadError> {
    let path = path.as_ref();
    let options = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj(path, &options)?;

    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    for model in &models {
        let base = vertices.len();
        let mesh = &model.mesh;

        for (i, p) in mesh.positions.chunks_exact(3).enumerate() {
            let color = mesh
                .vertex_color
                .get(i * 3..i * 3 + 3)
                .map(|c| Color::from_rgb_f32([c[0] * 255.0, c[1] * 255.0, c[2] * 255.0]))
                .unwrap_or(DEFAULT_VERTEX_COLOR);
            vertices.push(Vertex::new(Vec3::new(p[0], p[1], p[2]), color));
        }

        for tri in mesh.indices.chunks_exact(3) {
            faces.push([
                base + tri[0] as usize,
                base + tri[1] as usize,
                base + tri[2] as usize,
            ]);
        }
    }

    if faces.is_empty() {
        return Err(LoadError::Empty);
    }
    if let Some(&index) = faces.iter().flatten().find(|&&i| i >= vertices.len()) {
        return Err(LoadError::IndexOutOfRange {
            index,
            count: vertices.len(),
        });
    }

    let center = vertices.iter().fold(Vec3::ZERO, |acc, v| acc + v.pos) * (1.0 / vertices.len() as f32);
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "obj".to_string());

    log::debug!(
        "loaded {} from {}: {} objects, {} vertices, {} faces",
        name,
        path.display(),
        models.len(),
        vertices.len(),
        faces.len()
    );
    Ok(TriangleMesh::new(name, vertices, &faces, center))
}
