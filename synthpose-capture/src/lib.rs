//! Capture sessions for synthpose
//!
//! A [`CaptureSession`] frames the scene, then repeatedly rotates the camera
//! and light rigs by a random delta, asks the external [`Renderer`] for an
//! image, stores the segmentation mask and records the rig orientation.
//!
//! [`Renderer`]: synthpose_core::Renderer

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::{CaptureSession, SessionState};
