//! Session configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use synthpose_core::{Error, ImageFormat, Result};
use synthpose_io::OutputLayout;

/// Everything a capture session needs besides the scene and collaborators.
///
/// Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Root of the `data/` and `annotation/` directories
    pub output_directory: PathBuf,
    /// Model the host imported into the scene; recorded for provenance only
    pub object_source_file: Option<PathBuf>,
    /// Number of frames to capture; 0 captures nothing
    pub capture_count: usize,
    pub image_format: ImageFormat,
    /// Project meshes and store a 2D box per frame
    pub annotate_bounding_boxes: bool,
    /// Fixed RNG seed for reproducible orientation sequences
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("."),
            object_source_file: None,
            capture_count: 0,
            image_format: ImageFormat::default(),
            annotate_bounding_boxes: false,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Load a JSON configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Output layout rooted at [`SessionConfig::output_directory`]
    pub fn layout(&self) -> OutputLayout {
        OutputLayout::new(&self.output_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.output_directory, PathBuf::from("."));
        assert_eq!(config.capture_count, 0);
        assert_eq!(config.image_format, ImageFormat::Png);
        assert!(!config.annotate_bounding_boxes);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = SessionConfig::from_json(
            r#"{"capture_count": 12, "image_format": "JPEG", "seed": 3}"#,
        )
        .unwrap();
        assert_eq!(config.capture_count, 12);
        assert_eq!(config.image_format, ImageFormat::Jpeg);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.output_directory, PathBuf::from("."));
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = SessionConfig::from_json(r#"{"capture_count": -1}"#).unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"output_directory": "/tmp/run", "object_source_file": "models/juno.obj"}"#)
            .unwrap();

        let config = SessionConfig::from_path(&path).unwrap();
        assert_eq!(config.layout().data_dir(), PathBuf::from("/tmp/run/data"));
        assert_eq!(config.object_source_file, Some(PathBuf::from("models/juno.obj")));
    }
}
