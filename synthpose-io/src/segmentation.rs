//! Segmentation pass read back from the renderer's scratch output

use ndarray::Array3;
use std::path::{Path, PathBuf};
use synthpose_core::{Error, Result, Scene, SegmentationPass, SegmentationSource};

/// File the renderer's object-index output node writes for a single frame
pub const SEGMENTATION_FILE: &str = "SegmentationMask0001.exr";

/// Loads the object-index pass from the image the renderer left on disk.
///
/// Pixels come back as `(rows, cols, 4)` RGBA floats with row 0 at the top of
/// the image; the object index lives in channel 0.
#[derive(Debug, Clone)]
pub struct ExrSegmentationSource {
    path: PathBuf,
}

impl ExrSegmentationSource {
    /// Source reading [`SEGMENTATION_FILE`] from the renderer's scratch directory
    pub fn new<P: AsRef<Path>>(temp_dir: P) -> Self {
        Self {
            path: temp_dir.as_ref().join(SEGMENTATION_FILE),
        }
    }

    /// Source reading an explicit file
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the pass, checking it against the expected `(width, height)`.
    ///
    /// Returns `Ok(None)` when the renderer has not written the file.
    pub fn load(&self, expected: (u32, u32)) -> Result<Option<SegmentationPass>> {
        if !self.path.is_file() {
            tracing::warn!(path = %self.path.display(), "segmentation pass not found");
            return Ok(None);
        }

        let image = image::open(&self.path)
            .map_err(|e| Error::segmentation(format!("{}: {e}", self.path.display())))?
            .into_rgba32f();

        let (width, height) = image.dimensions();
        if (width, height) != expected {
            return Err(Error::InvalidData(format!(
                "segmentation pass is {width}x{height}, expected {}x{}",
                expected.0, expected.1
            )));
        }

        let pixels = Array3::from_shape_vec((height as usize, width as usize, 4), image.into_raw())
            .map_err(|e| Error::InvalidData(e.to_string()))?;
        Ok(Some(pixels))
    }
}

impl SegmentationSource for ExrSegmentationSource {
    fn extract_segmentation(&mut self, scene: &Scene) -> Result<Option<SegmentationPass>> {
        self.load(scene.intrinsics().scaled_resolution())
    }
}
