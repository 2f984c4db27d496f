use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::math::Vec3;

/// Offset subtracted from the unsigned triangle distance so the surface is
/// a closed shell around the faces.
pub const MESH_INFLATION: f32 = 0.05;

#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    fn is_degenerate(&self) -> bool {
        (self.b - self.a).cross(self.a - self.c).length_squared() == 0.0
    }

    pub fn distance_squared(&self, p: Vec3) -> f32 {
        let ba = self.b - self.a;
        let pa = p - self.a;
        let cb = self.c - self.b;
        let pb = p - self.b;
        let ac = self.a - self.c;
        let pc = p - self.c;
        let nor = ba.cross(ac);

        let inside = sign(ba.cross(nor).dot(pa))
            + sign(cb.cross(nor).dot(pb))
            + sign(ac.cross(nor).dot(pc));

        if inside < 2.0 {
            let edge_ab = ((ba * (ba.dot(pa) / ba.length_squared()).clamp(0.0, 1.0)) - pa)
                .length_squared();
            let edge_bc = ((cb * (cb.dot(pb) / cb.length_squared()).clamp(0.0, 1.0)) - pb)
                .length_squared();
            let edge_ca = ((ac * (ac.dot(pc) / ac.length_squared()).clamp(0.0, 1.0)) - pc)
                .length_squared();
            edge_ab.min(edge_bc).min(edge_ca)
        } else {
            let height = nor.dot(pa);
            height * height / nor.length_squared()
        }
    }
}

fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    source: String,
    position: Vec3,
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn from_triangles(
        source: impl Into<String>,
        position: Vec3,
        triangles: Vec<Triangle>,
    ) -> Result<Self> {
        let source = source.into();
        let total = triangles.len();
        let triangles: Vec<Triangle> = triangles
            .into_iter()
            .filter(|triangle| !triangle.is_degenerate())
            .collect();
        if triangles.len() < total {
            debug!(
                "mesh '{source}': dropped {} degenerate triangles",
                total - triangles.len()
            );
        }
        if triangles.is_empty() {
            return Err(Error::EmptyMesh(source));
        }

        Ok(Self {
            source,
            position,
            triangles,
        })
    }

    /// Loads an OBJ file, scaling every vertex then translating it to `position`.
    pub fn load(path: &Path, position: Vec3, scale: Vec3) -> Result<Self> {
        let source = path.display().to_string();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|error| Error::MeshLoad {
            path: source.clone(),
            source: error,
        })?;

        let mut triangles = Vec::new();
        for model in &models {
            let positions = &model.mesh.positions;
            let vertex = |index: u32| -> Vec3 {
                let i = index as usize * 3;
                Vec3::new(positions[i], positions[i + 1], positions[i + 2]) * scale + position
            };
            for face in model.mesh.indices.chunks_exact(3) {
                triangles.push(Triangle::new(
                    vertex(face[0]),
                    vertex(face[1]),
                    vertex(face[2]),
                ));
            }
        }

        let mesh = Self::from_triangles(source, position, triangles)?;
        info!(
            "Loaded mesh '{}' with {} triangles",
            mesh.source,
            mesh.triangles.len()
        );
        Ok(mesh)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn distance(&self, p: Vec3) -> f32 {
        let nearest = self
            .triangles
            .iter()
            .map(|triangle| triangle.distance_squared(p))
            .fold(f32::INFINITY, f32::min);
        nearest.sqrt() - MESH_INFLATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_triangle() -> Triangle {
        Triangle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn point_above_face_measures_plane_distance() {
        let squared = unit_triangle().distance_squared(Vec3::new(0.25, 0.25, 2.0));
        assert_abs_diff_eq!(squared, 4.0, epsilon = 1e-5);
    }

    #[test]
    fn point_outside_face_measures_nearest_edge() {
        let triangle = unit_triangle();
        assert_abs_diff_eq!(
            triangle.distance_squared(Vec3::new(2.0, 0.0, 0.0)),
            1.0,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            triangle.distance_squared(Vec3::new(0.5, -1.0, 0.0)),
            1.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn mesh_distance_is_inflated() {
        let mesh = Mesh::from_triangles("test", Vec3::ZERO, vec![unit_triangle()])
            .expect("non-empty mesh");
        assert_abs_diff_eq!(
            mesh.distance(Vec3::new(0.25, 0.25, 1.0)),
            1.0 - MESH_INFLATION,
            epsilon = 1e-5
        );
    }

    #[test]
    fn rejects_mesh_without_usable_faces() {
        let flat = Triangle::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        let error = Mesh::from_triangles("flat", Vec3::ZERO, vec![flat]).expect_err("empty mesh");
        assert!(matches!(error, Error::EmptyMesh(_)));
    }

    #[test]
    fn loads_obj_with_scale_and_translation() {
        let path = std::env::temp_dir().join(format!("sdfmarch_quad_{}.obj", std::process::id()));
        std::fs::write(
            &path,
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n",
        )
        .expect("write temp obj");

        let mesh = Mesh::load(&path, Vec3::new(0.0, 0.0, -1.0), Vec3::splat(2.0));
        let _ = std::fs::remove_file(&path);
        let mesh = mesh.expect("quad loads");

        assert_eq!(mesh.triangle_count(), 2);
        // Quad now spans [0, 2] x [0, 2] at z = -1.
        assert_abs_diff_eq!(
            mesh.distance(Vec3::new(1.5, 1.5, 0.0)),
            1.0 - MESH_INFLATION,
            epsilon = 1e-5
        );
    }

    #[test]
    fn reports_missing_file() {
        let error = Mesh::load(
            Path::new("/nonexistent/sdfmarch/missing.obj"),
            Vec3::ZERO,
            Vec3::splat(1.0),
        )
        .expect_err("missing file");
        assert!(matches!(error, Error::MeshLoad { .. }));
    }
}
