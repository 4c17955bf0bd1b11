//! Core traits for synthpose

use crate::{bounds::BoundingBox3D, mesh::Mesh, scene::Scene, Result, SegmentationPass};
use std::path::Path;

/// Trait for objects with a local-space extent
pub trait Bounded {
    /// Axis-aligned box around the local-space geometry, `None` when empty
    fn local_bounds(&self) -> Option<BoundingBox3D>;

    /// The 8 corners of the local box mapped to world space
    fn world_corners(&self) -> Vec<nalgebra::Point3<f64>>;
}

impl Bounded for Mesh {
    fn local_bounds(&self) -> Option<BoundingBox3D> {
        BoundingBox3D::from_points(self.vertices.iter().copied())
    }

    fn world_corners(&self) -> Vec<nalgebra::Point3<f64>> {
        match self.local_bounds() {
            Some(bounds) => bounds
                .corners()
                .iter()
                .map(|c| self.world_transform.transform_point(c))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// External renderer capability.
///
/// Renders the current scene state and writes one image to `output`. The
/// call is synchronous and either completes or fails; there are no partial
/// results.
pub trait Renderer {
    fn render(&mut self, scene: &Scene, output: &Path) -> Result<()>;
}

/// External object-index pass capability.
///
/// Returns `Ok(None)` when the collaborator has no data for the current frame.
pub trait SegmentationSource {
    fn extract_segmentation(&mut self, scene: &Scene) -> Result<Option<SegmentationPass>>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, scene: &Scene, output: &Path) -> Result<()> {
        (**self).render(scene, output)
    }
}

impl<S: SegmentationSource + ?Sized> SegmentationSource for &mut S {
    fn extract_segmentation(&mut self, scene: &Scene) -> Result<Option<SegmentationPass>> {
        (**self).extract_segmentation(scene)
    }
}
