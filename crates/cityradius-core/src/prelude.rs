//! cityradius prelude: bring common types and traits into scope for demos.

pub use crate::error::{CityRadiusError, IngestError, NotFoundError, QueryError, Result};
pub use crate::metric::Metric;
pub use crate::model::{City, Point, PointStore, PointStoreBuilder};
pub use crate::search::{check_radius, find_nearby, Neighbor, QueryResult};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::RadiusSearch;
pub use crate::StoreStats;
