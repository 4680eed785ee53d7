// crates/cityradius-core/src/metric.rs

//! The three supported distance functions.

use crate::error::QueryError;
use crate::model::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance metric selector.
///
/// The numeric ids (`0`, `1`, `2`) are the ones used by the interactive
/// front-end and by [`find_nearby`](crate::find_nearby).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// `sqrt(dx² + dy²)`
    #[default]
    Euclidean,
    /// `max(|dx|, |dy|)`
    Chebyshev,
    /// `|dx| + |dy|`
    Manhattan,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Euclidean, Metric::Chebyshev, Metric::Manhattan];

    pub fn from_id(id: i64) -> Result<Self, QueryError> {
        match id {
            0 => Ok(Metric::Euclidean),
            1 => Ok(Metric::Chebyshev),
            2 => Ok(Metric::Manhattan),
            other => Err(QueryError::InvalidMetric(other)),
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Metric::Euclidean => 0,
            Metric::Chebyshev => 1,
            Metric::Manhattan => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Euclidean => "euclidean",
            Metric::Chebyshev => "chebyshev",
            Metric::Manhattan => "manhattan",
        }
    }

    /// Distance between `a` and `b`. Never negative.
    #[inline]
    pub fn distance(self, a: &Point, b: &Point) -> f64 {
        let (dx, dy) = a.abs_diff(b);
        match self {
            Metric::Euclidean => (dx * dx + dy * dy).sqrt(),
            Metric::Chebyshev => dx.max(dy),
            Metric::Manhattan => dx + dy,
        }
    }
}

impl TryFrom<i64> for Metric {
    type Error = QueryError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Metric::from_id(id)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts a numeric id or a (case-insensitive) name, with the usual
/// norm aliases (`l2`, `linf`/`max`, `l1`/`taxicab`).
impl FromStr for Metric {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return Metric::from_id(id);
        }
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            "chebyshev" | "linf" | "max" => Ok(Metric::Chebyshev),
            "manhattan" | "l1" | "taxicab" => Ok(Metric::Manhattan),
            _ => Err(QueryError::UnknownMetric(s.to_string())),
        }
    }
}
