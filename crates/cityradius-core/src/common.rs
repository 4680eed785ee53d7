// crates/cityradius-core/src/common.rs
use crate::model::Point;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a store.
///
/// Returned by [`PointStore::stats`](crate::PointStore::stats).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreStats {
    pub cities: usize,
    /// Bounding rectangle of all cities; `None` for an empty store.
    pub extent: Option<Extent>,
}

/// Axis-aligned rectangle spanned by `min` and `max` corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min: Point,
    pub max: Point,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}
