// crates/cityradius-core/src/model/mod.rs
pub mod point;
pub mod store;

pub use point::{City, Point};
pub use store::{PointStore, PointStoreBuilder};

/// Suffix appended to a source file name for its binary snapshot.
pub const CACHE_SUFFIX: &str = "bin";
