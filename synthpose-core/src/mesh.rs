//! Mesh data structures and functionality

use crate::point::*;
use crate::transform::Transform3D;
use serde::{Deserialize, Serialize};

/// A mesh object as seen by the annotation pipeline: local-space vertex
/// positions, a world transform and the object index rendered into the
/// segmentation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Point3d>,
    pub world_transform: Transform3D,
    /// 0 means "background"; see [`crate::Scene::assign_pass_indices`].
    pub pass_index: u32,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            world_transform: Transform3D::identity(),
            pass_index: 0,
        }
    }

    /// Create a mesh from local-space vertices
    pub fn from_vertices(name: impl Into<String>, vertices: Vec<Point3d>) -> Self {
        Self {
            name: name.into(),
            vertices,
            world_transform: Transform3D::identity(),
            pass_index: 0,
        }
    }

    /// Replace the world transform
    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.world_transform = transform;
        self
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_with_transform_keeps_local_vertices() {
        let mesh = Mesh::from_vertices("cube", vec![Point3d::new(1.0, 0.0, 0.0)])
            .with_transform(Transform3D::translation(Vector3d::new(0.0, 0.0, -2.0)));

        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.pass_index, 0);
        assert_relative_eq!(mesh.vertices[0], Point3d::new(1.0, 0.0, 0.0));
        let world = mesh.world_transform.transform_point(&mesh.vertices[0]);
        assert_relative_eq!(world, Point3d::new(1.0, 0.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_new_mesh_is_empty() {
        let mesh = Mesh::new("empty");
        assert!(mesh.is_empty());
        assert_eq!(mesh.world_transform, Transform3D::identity());
    }
}
