use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use thiserror::Error;

use super::model::{Record, ScoreDataset};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by the dataset loader.  A failed load is all-or-nothing:
/// no partially parsed dataset is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset not found: {path}")]
    ResourceNotFound { path: PathBuf },

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("row {row} of {path}: {source}")]
    Parse {
        path: PathBuf,
        row: usize,
        #[source]
        source: csv::Error,
    },
}

fn io_error(path: &Path, source: io::Error) -> LoadError {
    if source.kind() == io::ErrorKind::NotFound {
        LoadError::ResourceNotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn open_error(path: &Path, err: csv::Error) -> LoadError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => io_error(path, source),
        other => LoadError::Io {
            path: path.to_path_buf(),
            source: io::Error::other(format!("{other:?}")),
        },
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load the long-form scores CSV at `path`.
///
/// Expected header: `Division,Sex,Event,Year,Points,Shift`.
///
/// Quoting is disabled: the source format treats quote characters as literal
/// content, not syntax, so no field-level quote stripping happens here.
pub fn load(path: &Path) -> Result<ScoreDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .quoting(false)
        .from_path(path)
        .map_err(|e| open_error(path, e))?;

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<Record>().enumerate() {
        // Line 1 is the header, so data row i sits on line i + 2.
        let record = row.map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            row: i + 2,
            source,
        })?;
        records.push(record);
    }

    log::info!("loaded {} rows from {}", records.len(), path.display());
    Ok(ScoreDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// DatasetCache – memoize by path, invalidate by mtime
// ---------------------------------------------------------------------------

/// Memoizes loaded datasets per resolved path, invalidated by file mtime.
///
/// The mtime is observed lazily on each [`fetch`](Self::fetch); there is no
/// filesystem watcher.  A failed fetch leaves any previously cached entry
/// intact, so the caller can simply call again once the resource is fixed.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

struct CacheEntry {
    mtime: SystemTime,
    dataset: Arc<ScoreDataset>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the dataset for `path`, reloading only when the file's
    /// modification time has changed since the last successful load.
    pub fn fetch(&mut self, path: &Path) -> Result<Arc<ScoreDataset>, LoadError> {
        let resolved = fs::canonicalize(path).map_err(|e| io_error(path, e))?;
        let meta = fs::metadata(&resolved).map_err(|e| io_error(path, e))?;
        let mtime = meta.modified().map_err(|e| io_error(path, e))?;

        if let Some(entry) = self.entries.get(&resolved) {
            if entry.mtime == mtime {
                return Ok(Arc::clone(&entry.dataset));
            }
            log::info!("{} changed on disk, reloading", resolved.display());
        }

        let dataset = Arc::new(load(&resolved)?);
        self.entries.insert(
            resolved,
            CacheEntry {
                mtime,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }
}
