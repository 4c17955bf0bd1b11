//! # synthpose
//!
//! Synthetic training data for pose estimation.
//!
//! A capture session orbits a camera and light around an imported model,
//! renders a frame per random orientation and records, for every frame, the
//! camera orientation, an object-index segmentation mask and optionally a 2D
//! bounding box. This umbrella crate re-exports the individual crates.
//!
//! ## Features
//!
//! - **Core**: scene model, camera intrinsics, bounding boxes, renderer traits
//! - **Algorithms**: camera framing, bounding box projection, orientation sampling
//! - **I/O**: annotation document, `.npy` masks, output directory layout
//! - **Capture**: the capture session state machine
//!
//! ## Quick Start
//!
//! ```rust
//! use synthpose::prelude::*;
//!
//! let cube = Mesh::from_vertices(
//!     "cube",
//!     vec![Point3d::new(-1.0, -1.0, -1.0), Point3d::new(1.0, 1.0, 1.0)],
//! );
//! let mut scene = Scene::new(vec![cube], CameraIntrinsics::new(0.8, 0.6, 640, 480));
//!
//! // Move the camera back until the cube fits the narrower field of view
//! let distance = frame_scene(&mut scene).unwrap().unwrap();
//! assert!(distance > 0.0);
//!
//! // Bounding box of the cube in pixels
//! let boxes = project_scene(&scene);
//! assert_eq!(boxes.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables algorithms, io and capture
//! - `algorithms`: Geometry of the annotation pipeline
//! - `io`: Persistence of annotations and masks
//! - `capture`: Capture sessions (pulls in algorithms and io)
//! - `all`: Enables all features

// Re-export core functionality
pub use synthpose_core::*;

// Re-export sub-crates
#[cfg(feature = "algorithms")]
pub use synthpose_algorithms as algorithms;

#[cfg(feature = "io")]
pub use synthpose_io as io;

#[cfg(feature = "capture")]
pub use synthpose_capture as capture;

/// Convenient imports for common use cases
pub mod prelude {
    pub use synthpose_core::{
        Bounded, BoundingBox2D, BoundingBox3D, Camera, CameraFrame, CameraIntrinsics, Error,
        ImageFormat, Mesh, Point2d, Point3d, RenderSettings, Renderer, Result, Rig, Scene,
        SegmentationPass, SegmentationSource, Transform3D, UnitQuaternion, Vector3d, ViewFrame,
    };

    #[cfg(feature = "algorithms")]
    pub use synthpose_algorithms::{
        checked_standoff_distance, compute_standoff_distance, compute_world_bounds,
        format_as_xywh, frame_scene, orientation_sequence, project_bounding_box, project_scene,
        sample_uniform_quaternion, union_bounding_box, ObjectBoundingBox, OrientationSampler,
        PixelCorners,
    };

    #[cfg(feature = "io")]
    pub use synthpose_io::{AnnotationRecord, AnnotationStore, ExrSegmentationSource, OutputLayout};

    #[cfg(feature = "capture")]
    pub use synthpose_capture::{CaptureSession, SessionConfig, SessionState};
}
