// crates/cityradius-core/src/model/point.rs
use serde::{Deserialize, Serialize};

/// A location on the plane. Two points with the same coordinates are
/// indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Absolute per-axis differences `(|dx|, |dy|)`.
    #[inline]
    pub fn abs_diff(&self, other: &Point) -> (f64, f64) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A named point. Names are unique within a [`PointStore`](super::PointStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub point: Point,
}

impl City {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            point: Point::new(x, y),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }
}
