// crates/cityradius-core/src/search.rs

//! The query engine.
//!
//! A query runs in two phases:
//! 1. the x- and y-sorted indices each yield a contiguous strip around the
//!    query point; their intersection is the bounding square,
//! 2. only cities inside the square get an exact distance, which is then
//!    compared against the radius.

use crate::error::QueryError;
use crate::metric::Metric;
use crate::model::{City, Point, PointStore};
use crate::traits::RadiusSearch;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One hit of a radius query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub distance: f64,
    pub name: String,
}

/// Outcome of a radius query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Hits ordered by ascending distance, equal distances by name.
    pub cities: Vec<Neighbor>,
    pub total_found: usize,
    /// Hits whose `x` is strictly greater than the query city's `x`.
    /// The interactive front-end has historically labelled this count
    /// "north".
    pub east_count: usize,
}

impl QueryResult {
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.cities.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor> {
        self.cities.iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a Neighbor;
    type IntoIter = std::slice::Iter<'a, Neighbor>;

    fn into_iter(self) -> Self::IntoIter {
        self.cities.iter()
    }
}

/// Sole query entry point for front-ends that carry the metric as a
/// numeric id (`0` euclidean, `1` chebyshev, `2` manhattan).
///
/// Checks are made in order: city name, radius, metric.
pub fn find_nearby(
    store: &PointStore,
    city_name: &str,
    radius: f64,
    metric: i64,
) -> Result<QueryResult, QueryError> {
    if !store.contains(city_name) {
        return Err(QueryError::CityNotFound(city_name.to_string()));
    }
    check_radius(radius)?;
    let metric = Metric::from_id(metric)?;
    store.search_nearby(city_name, radius, metric)
}

/// Accepts any non-negative radius, including infinity.
#[inline]
pub fn check_radius(radius: f64) -> Result<f64, QueryError> {
    // also rejects NaN
    if radius >= 0.0 {
        Ok(radius)
    } else {
        Err(QueryError::InvalidRadius(radius))
    }
}

impl PointStore {
    /// Store positions inside the bounding square, ascending.
    fn square_positions(&self, center: Point, radius: f64) -> Vec<usize> {
        let mut xs = self.x_strip(center.x - radius, center.x + radius).to_vec();
        let mut ys = self.y_strip(center.y - radius, center.y + radius).to_vec();
        xs.sort_unstable();
        ys.sort_unstable();
        intersect_sorted(&xs, &ys)
    }
}

/// Merge-intersection of two ascending position lists.
fn intersect_sorted(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

impl RadiusSearch for PointStore {
    fn bounding_square(&self, center: Point, radius: f64) -> Vec<&City> {
        self.square_positions(center, radius)
            .into_iter()
            .map(|p| self.city_at(p))
            .collect()
    }

    fn search_nearby(&self, name: &str, radius: f64, metric: Metric) -> Result<QueryResult, QueryError> {
        let origin = self
            .position_of(name)
            .ok_or_else(|| QueryError::CityNotFound(name.to_string()))?;
        check_radius(radius)?;

        let center = self.city_at(origin).point;
        let candidates = self.square_positions(center, radius);

        let mut east_count = 0;
        let mut cities = Vec::new();
        for pos in candidates.iter().copied().filter(|&p| p != origin) {
            let city = self.city_at(pos);
            let distance = metric.distance(&center, &city.point);
            if distance <= radius {
                if city.x() > center.x {
                    east_count += 1;
                }
                cities.push(Neighbor {
                    distance,
                    name: city.name.clone(),
                });
            }
        }
        cities.sort_by(|a, b| a.distance.total_cmp(&b.distance).then_with(|| a.name.cmp(&b.name)));

        tracing::debug!(
            city = name,
            radius,
            %metric,
            candidates = candidates.len(),
            found = cities.len(),
            "Radius query"
        );

        Ok(QueryResult {
            total_found: cities.len(),
            east_count,
            cities,
        })
    }
}
