// crates/cityradius-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, snapshots) and
//! delegates to the line-pair text parser.

use crate::error::IngestError;
use crate::model::PointStore;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

mod cache;
mod text;

pub use cache::cache_path;

impl PointStore {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "data.txt"
    }

    pub fn default_dataset_path() -> PathBuf {
        Self::default_data_dir().join(Self::default_dataset_filename())
    }

    /// Parses a store from line pairs:
    ///
    /// ```text
    /// <city name>
    /// <x> <separator> <y>
    /// ```
    ///
    /// A zero-byte source is rejected with [`IngestError::EmptySource`]. A
    /// name on the last line with no coordinate line after it is dropped.
    ///
    /// ```
    /// use cityradius_core::PointStore;
    ///
    /// let data = "Springfield\n1.5 , -2\nShelbyville\n4, 0.25\n";
    /// let store = PointStore::load_from_reader(data.as_bytes()).unwrap();
    /// assert_eq!(store.len(), 2);
    /// assert_eq!(store.locate("Shelbyville").unwrap().y, 0.25);
    /// ```
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self, IngestError> {
        text::parse(BufReader::new(reader))
    }

    /// Loads a text source from disk. With the `compact` feature, files
    /// ending in `.gz` are decompressed on the fly.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        Self::load_from_reader(reader)
    }

    /// Like [`PointStore::load_from_path`], but goes through a bincode
    /// snapshot stored next to the source (see [`cache_path`]).
    ///
    /// A snapshot not strictly newer than its source is ignored. Failing to write a
    /// snapshot is logged and otherwise ignored.
    pub fn load_cached(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        cache::load_or_build(path.as_ref())
    }
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when needed.
/// The caller doesn't care about the compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>, IngestError> {
    let open_err = |source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_err)?;

    // Checked here as a compressed empty file is not zero bytes once decoded
    if fs::metadata(path).map_err(open_err)?.len() == 0 {
        return Err(IngestError::EmptySource);
    }

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            use flate2::read::GzDecoder;
            tracing::debug!(path = %path.display(), "Loading gzip compressed source");
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
