// crates/cityradius-core/src/lib.rs

//! # cityradius-core
//!
//! Radius-bounded neighbour queries over a fixed set of named 2D points.
//!
//! A [`PointStore`] is loaded once and never mutated afterwards. Queries go
//! through [`find_nearby`] (numeric metric id, as typed by a user) or the
//! [`RadiusSearch`] trait (typed [`Metric`]).
//!
//! ```
//! use cityradius_core::{find_nearby, PointStore};
//!
//! let data = "A\n0 , 0\nB\n3 , 0\nC\n0 , 4\nD\n3 , 4\n";
//! let store = PointStore::load_from_reader(data.as_bytes()).unwrap();
//!
//! let res = find_nearby(&store, "A", 5.0, 0).unwrap();
//! assert_eq!(res.names(), ["B", "C", "D"]);
//! assert_eq!(res.total_found, 3);
//! assert_eq!(res.east_count, 2);
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod metric;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{Extent, StoreStats};
pub use crate::error::{CityRadiusError, IngestError, NotFoundError, QueryError, Result};
pub use crate::metric::Metric;
pub use crate::model::{City, Point, PointStore, PointStoreBuilder};
pub use crate::search::{check_radius, find_nearby, Neighbor, QueryResult};
pub use crate::traits::RadiusSearch;
