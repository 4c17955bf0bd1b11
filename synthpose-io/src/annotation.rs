//! Per-frame annotation records and the document that collects them
//!
//! The persisted document has the shape
//!
//! ```json
//! {"images": [{"id": 0, "image_file": "image0", "segmentation_file": "segmentation0.npy",
//!              "quaternion": [w, x, y, z], "bbox": [[x, y, w, h], ...]}]}
//! ```
//!
//! `bbox` holds one box per visible object, in mesh order, and is only present
//! for frames annotated with projected boxes;
//! `segmentation_file` is `null` when no segmentation pass was available.

use crate::error::serialization;
use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use synthpose_core::{BoundingBox2D, Result};

/// Annotation of one captured frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub id: usize,
    pub image_file: String,
    pub segmentation_file: Option<String>,
    /// Camera-axis orientation for the frame
    #[serde(with = "quaternion_wxyz")]
    pub quaternion: UnitQuaternion<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Per-object boxes of the visible meshes
    pub bbox: Option<Vec<BoundingBox2D>>,
}

/// Append-only, ordered collection of annotation records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStore {
    images: Vec<AnnotationRecord>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end
    pub fn append(&mut self, record: AnnotationRecord) {
        self.images.push(record);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[AnnotationRecord] {
        &self.images
    }

    /// The document as a JSON value, records under `images`
    pub fn serialize(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(serialization)
    }

    /// Pretty-printed document, 4-space indented
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = Vec::new();
        self.write_pretty(&mut out)?;
        String::from_utf8(out)
            .map_err(|e| synthpose_core::Error::Serialization(e.to_string()))
    }

    /// Parse a document produced by [`AnnotationStore::to_json_pretty`]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(serialization)
    }

    /// Write the document to `path`, replacing any previous file
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_pretty(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Read a document from `path`
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        serde_json::from_reader(BufReader::new(file)).map_err(serialization)
    }

    fn write_pretty<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        Serialize::serialize(self, &mut ser).map_err(serialization)
    }
}

/// Serializes a unit quaternion as `[w, x, y, z]`
mod quaternion_wxyz {
    use nalgebra::{Quaternion, UnitQuaternion};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Largest accepted deviation of a stored quaternion's norm from 1
    const NORM_TOLERANCE: f64 = 1e-6;

    pub fn serialize<S: Serializer>(q: &UnitQuaternion<f64>, ser: S) -> Result<S::Ok, S::Error> {
        [q.w, q.i, q.j, q.k].serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<UnitQuaternion<f64>, D::Error> {
        let [w, x, y, z] = <[f64; 4]>::deserialize(de)?;
        let q = Quaternion::new(w, x, y, z);
        let norm = q.norm();
        if !((norm - 1.0).abs() <= NORM_TOLERANCE) {
            return Err(D::Error::custom(format!(
                "quaternion [{w}, {x}, {y}, {z}] has norm {norm}, expected a unit rotation"
            )));
        }
        // within tolerance the stored values are kept as-is so round-trips stay exact
        Ok(UnitQuaternion::new_unchecked(q))
    }
}
