//! Explicit scene state handed to every pipeline component

use crate::camera::*;
use crate::mesh::Mesh;
use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

/// Output image format requested from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageFormat {
    #[default]
    #[serde(rename = "PNG")]
    Png,
    #[serde(rename = "JPEG")]
    Jpeg,
    #[serde(rename = "BMP")]
    Bmp,
    #[serde(rename = "TIFF")]
    Tiff,
    #[serde(rename = "OPEN_EXR")]
    OpenExr,
}

impl ImageFormat {
    /// Conventional file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Tiff => "tif",
            ImageFormat::OpenExr => "exr",
        }
    }
}

/// Render settings that are not camera intrinsics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderSettings {
    pub image_format: ImageFormat,
}

/// The complete state a renderer needs for one frame.
///
/// All meshes hang off a fixed object axis at the world origin. The camera
/// hangs off `camera_axis`; the light is its own rig. Rotating both rigs by the
/// same delta keeps camera and light co-rotating around the object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub meshes: Vec<Mesh>,
    pub camera: Camera,
    pub camera_axis: Rig,
    pub light: Rig,
    pub render: RenderSettings,
}

impl Scene {
    /// Create a scene with identity rigs and the camera at the rig origin
    pub fn new(meshes: Vec<Mesh>, intrinsics: CameraIntrinsics) -> Self {
        Self {
            meshes,
            camera: Camera::new(intrinsics),
            camera_axis: Rig::new(),
            light: Rig::new(),
            render: RenderSettings::default(),
        }
    }

    /// Give mesh `i` the object index `i + 1`; index 0 stays background
    pub fn assign_pass_indices(&mut self) {
        for (i, mesh) in self.meshes.iter_mut().enumerate() {
            mesh.pass_index = i as u32 + 1;
        }
    }

    /// Rotate camera axis and light by the same delta
    pub fn rotate_rigs(&mut self, delta: &UnitQuaternion<f64>) {
        self.camera_axis.rotate(delta);
        self.light.rotate(delta);
    }

    /// Where the camera sits in the world this frame
    pub fn camera_frame(&self) -> CameraFrame {
        CameraFrame::from_rig(&self.camera_axis, &self.camera)
    }

    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.camera.intrinsics
    }
}
