// crates/cityradius-core/src/model/store.rs
use super::point::{City, Point};
use crate::common::{Extent, StoreStats};
use crate::error::{IngestError, NotFoundError};
use crate::text::{equals_folded, fold_key};
use bincode::Options;
use std::collections::HashMap;
use std::ops::Range;

/// Upper bound for a decoded snapshot, to keep a corrupt file from
/// allocating unbounded memory.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

/// The immutable, index-backed collection of all ingested cities.
///
/// Cities live in one contiguous vector. The three indices refer to it by
/// position:
/// - `by_x`: positions ordered by `x`, ties by insertion order
/// - `by_y`: positions ordered by `y`, ties by insertion order
/// - `by_name`: name -> position
///
/// Every city appears exactly once in each index. A store is only ever
/// produced by [`PointStoreBuilder::build`], so no caller can observe a
/// city present in one index but missing from another.
#[derive(Clone, Debug)]
pub struct PointStore {
    cities: Vec<City>,
    by_x: Vec<usize>,
    by_y: Vec<usize>,
    by_name: HashMap<String, usize>,
}

impl PointStore {
    pub fn builder() -> PointStoreBuilder {
        PointStoreBuilder::default()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// True iff `name` has been ingested. Exact, case-sensitive match.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Exact lookup of a city's coordinates.
    pub fn locate(&self, name: &str) -> Result<Point, NotFoundError> {
        self.get(name)
            .map(|c| c.point)
            .ok_or_else(|| NotFoundError(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.by_name.get(name).map(|&i| &self.cities[i])
    }

    /// All cities in insertion order.
    pub fn cities(&self) -> impl ExactSizeIterator<Item = &City> + '_ {
        self.cities.iter()
    }

    /// All cities ordered by ascending `x`.
    pub fn cities_by_x(&self) -> impl ExactSizeIterator<Item = &City> + '_ {
        self.by_x.iter().map(|&i| &self.cities[i])
    }

    /// All cities ordered by ascending `y`.
    pub fn cities_by_y(&self) -> impl ExactSizeIterator<Item = &City> + '_ {
        self.by_y.iter().map(|&i| &self.cities[i])
    }

    pub fn stats(&self) -> StoreStats {
        let extent = match (self.by_x.first(), self.by_x.last()) {
            (Some(&lo_x), Some(&hi_x)) => {
                // by_y is non-empty whenever by_x is
                let lo_y = self.by_y[0];
                let hi_y = self.by_y[self.by_y.len() - 1];
                Some(Extent {
                    min: Point::new(self.cities[lo_x].x(), self.cities[lo_y].y()),
                    max: Point::new(self.cities[hi_x].x(), self.cities[hi_y].y()),
                })
            }
            _ => None,
        };
        StoreStats {
            cities: self.cities.len(),
            extent,
        }
    }

    /// A city whose name matches `name` ignoring case and accents, for
    /// "did you mean" hints after an exact lookup failed.
    pub fn suggest(&self, name: &str) -> Option<&City> {
        self.cities.iter().find(|c| equals_folded(&c.name, name))
    }

    /// Accent- and case-insensitive substring search over city names.
    ///
    /// Results are ordered by name. An empty (or whitespace-only) query
    /// matches nothing.
    pub fn find_by_substring(&self, substr: &str) -> Vec<&City> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        let mut out: Vec<&City> = self
            .cities
            .iter()
            .filter(|c| fold_key(&c.name).contains(&q))
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    // -----------------------------------------------------------------------
    // INDEX ACCESS (used by the query engine)
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn city_at(&self, pos: usize) -> &City {
        &self.cities[pos]
    }

    #[inline]
    pub(crate) fn position_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Positions of every city with `x` in `[lo, hi]`, ordered by `x`.
    pub(crate) fn x_strip(&self, lo: f64, hi: f64) -> &[usize] {
        &self.by_x[self.strip(&self.by_x, lo, hi, |c| c.x())]
    }

    /// Positions of every city with `y` in `[lo, hi]`, ordered by `y`.
    pub(crate) fn y_strip(&self, lo: f64, hi: f64) -> &[usize] {
        &self.by_y[self.strip(&self.by_y, lo, hi, |c| c.y())]
    }

    fn strip(&self, index: &[usize], lo: f64, hi: f64, key: impl Fn(&City) -> f64) -> Range<usize> {
        let start = index.partition_point(|&i| key(&self.cities[i]) < lo);
        let end = index.partition_point(|&i| key(&self.cities[i]) <= hi);
        start..end.max(start)
    }

    // -----------------------------------------------------------------------
    // SNAPSHOTS
    // -----------------------------------------------------------------------

    /// Serializes the cities (insertion order) with bincode. Indices are not
    /// stored; [`PointStore::from_bytes`] rebuilds them.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IngestError> {
        Ok(bincode::DefaultOptions::new().serialize(&self.cities)?)
    }

    /// Rebuilds a store from a snapshot written by [`PointStore::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, IngestError> {
        let cities: Vec<City> = bincode::DefaultOptions::new()
            .with_limit(SNAPSHOT_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?;
        let mut builder = PointStoreBuilder::with_capacity(cities.len());
        for city in cities {
            builder.insert(city);
        }
        Ok(builder.build())
    }
}

impl FromIterator<City> for PointStore {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut builder = PointStoreBuilder::default();
        for city in iter {
            builder.insert(city);
        }
        builder.build()
    }
}

/// Accumulates cities and builds all three indices in one step.
#[derive(Debug, Default)]
pub struct PointStoreBuilder {
    cities: Vec<City>,
    by_name: HashMap<String, usize>,
}

impl PointStoreBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cities: Vec::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Adds a city. A name seen before replaces the earlier record, keeping
    /// its original insertion slot. Cities with non-finite coordinates are
    /// skipped since they cannot be ordered on either axis.
    pub fn insert(&mut self, city: City) -> &mut Self {
        if !city.point.is_finite() {
            tracing::warn!(name = %city.name, x = city.x(), y = city.y(), "Skipping city with non-finite coordinates");
            return self;
        }
        match self.by_name.get(&city.name) {
            Some(&pos) => {
                tracing::warn!(name = %city.name, "Duplicate city name, replacing earlier record");
                self.cities[pos] = city;
            }
            None => {
                self.by_name.insert(city.name.clone(), self.cities.len());
                self.cities.push(city);
            }
        }
        self
    }

    pub fn build(self) -> PointStore {
        let Self { cities, by_name } = self;

        let mut by_x: Vec<usize> = (0..cities.len()).collect();
        let mut by_y = by_x.clone();
        by_x.sort_by(|&a, &b| cities[a].x().total_cmp(&cities[b].x()).then(a.cmp(&b)));
        by_y.sort_by(|&a, &b| cities[a].y().total_cmp(&cities[b].y()).then(a.cmp(&b)));

        tracing::info!(count = cities.len(), "Built point store");
        PointStore {
            cities,
            by_x,
            by_y,
            by_name,
        }
    }
}
