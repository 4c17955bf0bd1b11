//! # synthpose algorithms
//!
//! The geometry behind the annotation pipeline.
//!
//! - [`bounds`]: world-space bounds of an object set and the camera standoff
//!   distance that frames it
//! - [`projection`]: per-object 2D bounding boxes in pixel space
//! - [`orientation`]: random rig orientations and their running composition

pub mod bounds;
pub mod projection;
pub mod orientation;

// Re-export commonly used items
pub use bounds::*;
pub use projection::*;
pub use orientation::*;
