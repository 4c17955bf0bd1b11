//! Core data structures and traits for synthpose
//!
//! This crate provides the scene model shared by the annotation pipeline:
//! meshes with world transforms, camera intrinsics and rigs, bounding boxes,
//! and the traits implemented by the external renderer collaborators.

pub mod point;
pub mod mesh;
pub mod bounds;
pub mod camera;
pub mod scene;
pub mod traits;
pub mod transform;
pub mod error;

pub use point::*;
pub use mesh::*;
pub use bounds::*;
pub use camera::*;
pub use scene::*;
pub use traits::*;
pub use transform::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Point3, Vector3, Matrix4, Quaternion, UnitQuaternion};

/// Object-index pass produced by a segmentation collaborator, shaped `(rows, cols, channels)`
pub type SegmentationPass = ndarray::Array3<f32>;
