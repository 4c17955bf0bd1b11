//! Axis-aligned boxes in world space and pixel space

use crate::point::*;
use serde::{Deserialize, Serialize};

/// World-space axis-aligned bounding box.
///
/// `min <= max` holds componentwise for every box built through
/// [`BoundingBox3D::from_points`] or [`BoundingBox3D::union`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox3D {
    pub min: Point3d,
    pub max: Point3d,
}

impl BoundingBox3D {
    /// Create a box from its two extreme corners
    pub fn new(min: Point3d, max: Point3d) -> Self {
        Self { min, max }
    }

    /// Fold a set of points into their enclosing box; `None` when empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3d>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(first, first);
        for p in points {
            bounds.min = component_min(&bounds.min, &p);
            bounds.max = component_max(&bounds.max, &p);
        }
        Some(bounds)
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: component_min(&self.min, &other.min),
            max: component_max(&self.max, &other.max),
        }
    }

    /// `max - min`
    pub fn dimensions(&self) -> Vector3d {
        self.max - self.min
    }

    /// Center point of the box
    pub fn center(&self) -> Point3d {
        nalgebra::center(&self.min, &self.max)
    }

    /// The 8 corners, ordered by (x, y, z) bit pattern
    pub fn corners(&self) -> [Point3d; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3d::new(lo.x, lo.y, lo.z),
            Point3d::new(lo.x, lo.y, hi.z),
            Point3d::new(lo.x, hi.y, lo.z),
            Point3d::new(lo.x, hi.y, hi.z),
            Point3d::new(hi.x, lo.y, lo.z),
            Point3d::new(hi.x, lo.y, hi.z),
            Point3d::new(hi.x, hi.y, lo.z),
            Point3d::new(hi.x, hi.y, hi.z),
        ]
    }
}

/// Pixel-space box with top-left origin, serialized as `[x, y, width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox2D {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox2D {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            width: self.x_max().max(other.x_max()) - x,
            height: self.y_max().max(other.y_max()) - y,
        }
    }
}

impl From<[f64; 4]> for BoundingBox2D {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self { x, y, width, height }
    }
}

impl From<BoundingBox2D> for [f64; 4] {
    fn from(b: BoundingBox2D) -> Self {
        [b.x, b.y, b.width, b.height]
    }
}
