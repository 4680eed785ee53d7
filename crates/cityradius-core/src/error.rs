// crates/cityradius-core/src/error.rs

//! Error families for the two phases of the store's life: building it
//! ([`IngestError`]) and querying it ([`QueryError`]).

use std::path::PathBuf;
use thiserror::Error;

/// Failures while building a [`PointStore`](crate::PointStore).
///
/// All of these are fatal to construction: there is no partially
/// loaded store.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input source is empty")]
    EmptySource,

    #[error("malformed record at line {line}: {record:?}")]
    MalformedRecord { line: usize, record: String },

    #[error("dataset not found at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Cache(#[from] bincode::Error),
}

/// Failures of a single radius query. The store is never modified, so the
/// caller can simply retry with corrected input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("city not found: {0}")]
    CityNotFound(String),

    #[error("radius must be a non-negative number, got {0}")]
    InvalidRadius(f64),

    #[error("metric must be 0 (euclidean), 1 (chebyshev) or 2 (manhattan), got {0}")]
    InvalidMetric(i64),

    #[error("unknown metric {0:?}")]
    UnknownMetric(String),

    #[error("radius must be a number, got {0:?}")]
    UnparsableRadius(String),
}

/// Returned by [`PointStore::locate`](crate::PointStore::locate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no city named {0:?}")]
pub struct NotFoundError(pub String);

impl From<NotFoundError> for QueryError {
    fn from(e: NotFoundError) -> Self {
        QueryError::CityNotFound(e.0)
    }
}

/// Umbrella error for callers that do not care which phase failed.
#[derive(Debug, Error)]
pub enum CityRadiusError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

pub type Result<T> = std::result::Result<T, CityRadiusError>;
