// crates/cityradius-core/src/traits.rs
use crate::error::QueryError;
use crate::metric::Metric;
use crate::model::{City, Point};
use crate::search::QueryResult;

/// Radius queries over a point collection.
///
/// Implemented for [`PointStore`](crate::PointStore) in `search.rs`.
pub trait RadiusSearch {
    /// Every city inside the axis-aligned square
    /// `[c.x - r, c.x + r] × [c.y - r, c.y + r]`, in insertion order.
    ///
    /// This is a superset of the cities within `radius` of `center` under
    /// any [`Metric`]: all three are bounded below by the per-axis
    /// difference.
    fn bounding_square(&self, center: Point, radius: f64) -> Vec<&City>;

    /// All other cities within `radius` of the named city, nearest first.
    ///
    /// # Example
    ///
    /// ```
    /// use cityradius_core::{City, Metric, PointStore, RadiusSearch};
    ///
    /// let store: PointStore = [
    ///     City::new("A", 0.0, 0.0),
    ///     City::new("B", 3.0, 0.0),
    ///     City::new("C", 0.0, 4.0),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let res = store.search_nearby("A", 3.5, Metric::Euclidean).unwrap();
    /// assert_eq!(res.names(), ["B"]);
    /// assert_eq!(res.east_count, 1);
    /// ```
    fn search_nearby(&self, name: &str, radius: f64, metric: Metric) -> Result<QueryResult, QueryError>;
}
