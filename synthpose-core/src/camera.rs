//! Camera intrinsics, rigs and per-frame camera placement

use crate::point::*;
use crate::transform::Transform3D;
use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

/// Lens angle of a 50mm lens on a 36mm sensor.
pub const DEFAULT_LENS_ANGLE: f64 = 0.691_111_161_163_424_3;

/// Field of view and output resolution of the scene camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Horizontal field of view in radians
    pub fov_x: f64,
    /// Vertical field of view in radians
    pub fov_y: f64,
    pub resolution_x: u32,
    pub resolution_y: u32,
    /// Scale applied to the resolution of pixel buffers, in percent
    #[serde(default = "default_resolution_percentage")]
    pub resolution_percentage: u32,
}

fn default_resolution_percentage() -> u32 {
    100
}

impl CameraIntrinsics {
    /// Create intrinsics from explicit horizontal and vertical angles
    pub fn new(fov_x: f64, fov_y: f64, resolution_x: u32, resolution_y: u32) -> Self {
        Self {
            fov_x,
            fov_y,
            resolution_x,
            resolution_y,
            resolution_percentage: default_resolution_percentage(),
        }
    }

    /// Create intrinsics from a single lens angle with automatic sensor fit:
    /// the angle spans the larger image dimension and the other one follows
    /// from the aspect ratio.
    pub fn from_lens_angle(angle: f64, resolution_x: u32, resolution_y: u32) -> Self {
        let half = (angle / 2.0).tan();
        let (w, h) = (resolution_x.max(1) as f64, resolution_y.max(1) as f64);
        let (fov_x, fov_y) = if w >= h {
            (angle, 2.0 * (half * h / w).atan())
        } else {
            (2.0 * (half * w / h).atan(), angle)
        };
        Self::new(fov_x, fov_y, resolution_x, resolution_y)
    }

    /// Set the pixel buffer scale
    pub fn with_resolution_percentage(mut self, percentage: u32) -> Self {
        self.resolution_percentage = percentage;
        self
    }

    /// The narrower of the two angles
    pub fn min_fov(&self) -> f64 {
        self.fov_x.min(self.fov_y)
    }

    /// Unscaled `(width, height)` used for annotation coordinates
    pub fn resolution(&self) -> (u32, u32) {
        (self.resolution_x, self.resolution_y)
    }

    /// `(width, height)` of rendered pixel buffers after percentage scaling
    pub fn scaled_resolution(&self) -> (u32, u32) {
        let scale = self.resolution_percentage as f64 / 100.0;
        (
            (self.resolution_x as f64 * scale) as u32,
            (self.resolution_y as f64 * scale) as u32,
        )
    }

    /// Near-plane rectangle at unit depth in camera space
    pub fn view_frame(&self) -> ViewFrame {
        let hx = (self.fov_x / 2.0).tan();
        let hy = (self.fov_y / 2.0).tan();
        ViewFrame {
            top_right: Vector3d::new(hx, hy, -1.0),
            bottom_right: Vector3d::new(hx, -hy, -1.0),
            bottom_left: Vector3d::new(-hx, -hy, -1.0),
            top_left: Vector3d::new(-hx, hy, -1.0),
        }
    }
}

impl Default for CameraIntrinsics {
    fn default() -> Self {
        Self::from_lens_angle(DEFAULT_LENS_ANGLE, 1920, 1080)
    }
}

/// The camera's near-plane rectangle in camera space; the camera looks down -Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    pub top_right: Vector3d,
    pub bottom_right: Vector3d,
    pub bottom_left: Vector3d,
    pub top_left: Vector3d,
}

impl ViewFrame {
    /// The first three corners sign-negated, so that their depth is positive
    pub fn negated_corners(&self) -> [Vector3d; 3] {
        [-self.top_right, -self.bottom_right, -self.bottom_left]
    }
}

/// A parent transform node whose rotation propagates to attached objects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    pub orientation: UnitQuaternion<f64>,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            orientation: UnitQuaternion::identity(),
        }
    }

    /// `orientation = orientation * delta`
    pub fn rotate(&mut self, delta: &UnitQuaternion<f64>) {
        self.orientation = self.orientation * delta;
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}

/// The scene camera: intrinsics plus a location relative to its rig
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub intrinsics: CameraIntrinsics,
    pub location: Point3d,
}

impl Camera {
    pub fn new(intrinsics: CameraIntrinsics) -> Self {
        Self {
            intrinsics,
            location: Point3d::origin(),
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraIntrinsics::default())
    }
}

/// World placement of the camera for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub position: Point3d,
    pub orientation: UnitQuaternion<f64>,
}

impl CameraFrame {
    /// Place `camera` under `rig`: rotate the camera's local location by the rig
    pub fn from_rig(rig: &Rig, camera: &Camera) -> Self {
        Self {
            position: rig.orientation * camera.location,
            orientation: rig.orientation,
        }
    }

    /// Maps world space to camera space; camera poses carry no scale
    pub fn world_inverse(&self) -> Transform3D {
        Transform3D::from(
            nalgebra::Isometry3::from_parts(self.position.coords.into(), self.orientation)
                .inverse(),
        )
    }
}
