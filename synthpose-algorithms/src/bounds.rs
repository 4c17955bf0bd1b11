//! Object-set bounds and camera framing

use synthpose_core::{Bounded, BoundingBox3D, Error, Mesh, Point3d, Result, Scene};

/// World-space bounding box of a set of meshes.
///
/// Each mesh contributes the 8 corners of its local box, mapped through its
/// world transform. Returns `None` for an empty set (or a set whose meshes
/// have no vertices); callers must check.
pub fn compute_world_bounds(meshes: &[Mesh]) -> Option<BoundingBox3D> {
    BoundingBox3D::from_points(meshes.iter().flat_map(|mesh| mesh.world_corners()))
}

/// Distance at which a camera frames `bounds`.
///
/// Uses the planar (X/Y) diagonal of the box and the narrower field of view:
/// `diagonal / (2 * tan(fov / 2))`. Depth along Z is ignored, so the result
/// assumes the object is viewed roughly along an axis. `min(fov_x, fov_y)`
/// must lie in `(0, π)`; see [`checked_standoff_distance`].
pub fn compute_standoff_distance(bounds: &BoundingBox3D, fov_x: f64, fov_y: f64) -> f64 {
    let dimension = bounds.dimensions();
    let max_dimension = (dimension.x * dimension.x + dimension.y * dimension.y).sqrt();
    let fov = fov_x.min(fov_y);
    max_dimension / (2.0 * (fov / 2.0).tan())
}

/// [`compute_standoff_distance`] with the field-of-view precondition enforced
pub fn checked_standoff_distance(bounds: &BoundingBox3D, fov_x: f64, fov_y: f64) -> Result<f64> {
    let fov = fov_x.min(fov_y);
    if !(fov > 0.0 && fov < std::f64::consts::PI) {
        return Err(Error::InvalidData(format!(
            "field of view must be in (0, pi), got {fov}"
        )));
    }
    Ok(compute_standoff_distance(bounds, fov_x, fov_y))
}

/// Place the scene camera on its rig's +Z axis at the standoff distance.
///
/// Returns the distance used, or `None` (camera untouched) when the scene has
/// no geometry to frame.
pub fn frame_scene(scene: &mut Scene) -> Result<Option<f64>> {
    let Some(bounds) = compute_world_bounds(&scene.meshes) else {
        tracing::warn!("scene has no geometry; camera placement skipped");
        return Ok(None);
    };

    let intrinsics = scene.intrinsics();
    let distance = checked_standoff_distance(&bounds, intrinsics.fov_x, intrinsics.fov_y)?;
    scene.camera.location = Point3d::new(0.0, 0.0, distance);
    tracing::debug!(?bounds, distance, "camera framed");
    Ok(Some(distance))
}
