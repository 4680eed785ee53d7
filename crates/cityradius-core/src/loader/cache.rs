// crates/cityradius-core/src/loader/cache.rs
use crate::error::IngestError;
use crate::model::{PointStore, CACHE_SUFFIX};
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot location for a source: `data.txt` -> `data.txt.bin`.
pub fn cache_path(source: &Path) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{filename}.{CACHE_SUFFIX}"))
}

pub(super) fn load_or_build(source: &Path) -> Result<PointStore, IngestError> {
    let bin_path = cache_path(source);

    // 1) Try the snapshot first
    if let Some(store) = read_fresh_snapshot(source, &bin_path) {
        tracing::debug!(path = %bin_path.display(), "Loaded point store snapshot");
        return Ok(store);
    }

    // 2) Fall back to the text source
    let store = PointStore::load_from_path(source)?;

    // 3) Best-effort: write the snapshot
    match store.to_bytes() {
        Ok(bytes) => match fs::write(&bin_path, bytes) {
            Ok(()) => tracing::debug!(path = %bin_path.display(), "Wrote point store snapshot"),
            Err(e) => tracing::warn!(path = %bin_path.display(), error = %e, "Could not write snapshot"),
        },
        Err(e) => tracing::warn!(error = %e, "Could not encode snapshot"),
    }

    Ok(store)
}

fn read_fresh_snapshot(source: &Path, bin_path: &Path) -> Option<PointStore> {
    let src_modified = fs::metadata(source).ok()?.modified().ok()?;
    let bin_modified = fs::metadata(bin_path).ok()?.modified().ok()?;
    // Equal mtimes can't prove the snapshot came after the last write
    if bin_modified <= src_modified {
        tracing::debug!(path = %bin_path.display(), "Snapshot is stale");
        return None;
    }

    let bytes = fs::read(bin_path).ok()?;
    match PointStore::from_bytes(&bytes) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::warn!(path = %bin_path.display(), error = %e, "Ignoring unreadable snapshot");
            None
        }
    }
}
