//! Output directory layout of a capture session
//!
//! ```text
//! <root>/data/image{i}                     rendered frames
//! <root>/annotation/segmentation{i}.npy    object-index masks
//! <root>/annotation/annotation.json        annotation document
//! <root>/tmp_exr/                          renderer scratch output
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use synthpose_core::{Error, Result};

pub const DATA_DIR: &str = "data";
pub const ANNOTATION_DIR: &str = "annotation";
pub const TEMP_DIR: &str = "tmp_exr";
pub const ANNOTATION_FILE: &str = "annotation.json";

/// Paths of everything a session writes under one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_DIR)
    }

    pub fn annotation_dir(&self) -> PathBuf {
        self.root.join(ANNOTATION_DIR)
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.root.join(TEMP_DIR)
    }

    /// Image name recorded in the annotation; the renderer adds the extension
    pub fn image_file_name(index: usize) -> String {
        format!("image{index}")
    }

    pub fn segmentation_file_name(index: usize) -> String {
        format!("segmentation{index}.npy")
    }

    pub fn image_path(&self, index: usize) -> PathBuf {
        self.data_dir().join(Self::image_file_name(index))
    }

    pub fn segmentation_path(&self, index: usize) -> PathBuf {
        self.annotation_dir().join(Self::segmentation_file_name(index))
    }

    pub fn annotation_path(&self) -> PathBuf {
        self.annotation_dir().join(ANNOTATION_FILE)
    }

    /// Create the data, annotation and scratch directories
    pub fn create_directories(&self) -> Result<()> {
        for dir in [self.data_dir(), self.annotation_dir(), self.temp_dir()] {
            ensure_directory(&dir)?;
        }
        Ok(())
    }

    /// Remove the previous contents of the data and annotation directories
    pub fn clean_outputs(&self) -> Result<()> {
        clean_folder(self.data_dir())?;
        clean_folder(self.annotation_dir())
    }
}

/// Create `path` and its parents.
///
/// An existing directory is not an error: it is logged and `Ok(false)` is
/// returned. Any other failure becomes [`Error::DirectoryCreate`].
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        tracing::info!(path = %path.display(), "directory exists, proceeding");
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|source| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "directory created");
    Ok(true)
}

/// Delete every entry inside `path`, keeping the directory itself.
///
/// A missing directory is a no-op. Entries that cannot be removed are logged
/// and skipped.
pub fn clean_folder<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        let removed = if entry_path.is_dir() && !entry_path.is_symlink() {
            fs::remove_dir_all(&entry_path)
        } else {
            fs::remove_file(&entry_path)
        };
        if let Err(e) = removed {
            tracing::warn!(path = %entry_path.display(), error = %e, "failed to delete");
        }
    }
    Ok(())
}
