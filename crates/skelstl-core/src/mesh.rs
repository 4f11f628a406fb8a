//! Triangle soup meshes

use glam::{DMat4, DVec3};

/// One triangle: unit normal plus three vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub normal: DVec3,
    pub vertices: [DVec3; 3],
}

impl Triangle {
    /// Create a triangle with the normal computed from the vertex winding
    pub fn from_vertices(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize_or_zero();
        Self {
            normal,
            vertices: [v0, v1, v2],
        }
    }
}

/// An immutable triangle soup, loaded from an STL file or generated as a
/// proxy. Transform application produces a new mesh; originals are never
/// mutated.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
}

impl TriangleMesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Apply a rigid transform, producing a new mesh
    ///
    /// Vertices take the full transform; normals only the rotation block,
    /// which preserves their length for proper rotations.
    pub fn transformed(&self, transform: &DMat4) -> TriangleMesh {
        let triangles = self
            .triangles
            .iter()
            .map(|triangle| Triangle {
                normal: transform.transform_vector3(triangle.normal),
                vertices: [
                    transform.transform_point3(triangle.vertices[0]),
                    transform.transform_point3(triangle.vertices[1]),
                    transform.transform_point3(triangle.vertices[2]),
                ],
            })
            .collect();
        TriangleMesh { triangles }
    }

    /// Concatenate several meshes into one, in order
    pub fn concatenate(meshes: &[TriangleMesh]) -> TriangleMesh {
        let mut triangles = Vec::with_capacity(meshes.iter().map(|m| m.triangle_count()).sum());
        for mesh in meshes {
            triangles.extend_from_slice(&mesh.triangles);
        }
        TriangleMesh { triangles }
    }
}
