//! Point and vector aliases used across the pipeline

use nalgebra::{Point2, Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 2D point in pixel space
pub type Point2d = Point2<f64>;

/// Componentwise minimum of two points
pub fn component_min(a: &Point3d, b: &Point3d) -> Point3d {
    Point3d::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Componentwise maximum of two points
pub fn component_max(a: &Point3d, b: &Point3d) -> Point3d {
    Point3d::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}
