//! I/O for synthpose capture sessions
//!
//! This crate owns everything a session persists: the annotation document,
//! NumPy segmentation masks and the output directory layout. It also provides
//! a [`SegmentationSource`](synthpose_core::SegmentationSource) that reads the
//! object-index pass a renderer leaves in its scratch directory.

pub mod annotation;
pub mod npy;
pub mod layout;
pub mod segmentation;
pub mod error;

pub use error::*;
pub use annotation::{AnnotationRecord, AnnotationStore};
pub use npy::{read_npy, write_npy};
pub use layout::{clean_folder, ensure_directory, OutputLayout};
pub use segmentation::ExrSegmentationSource;
