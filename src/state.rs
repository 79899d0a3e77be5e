use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::data::filter::FilterState;
use crate::data::loader::DatasetCache;
use crate::data::model::ScoreDataset;

/// How often the dataset file's mtime is re-checked.
const RELOAD_POLL_INTERVAL: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// All outputs (summary, table rows, chart series) are recomputed per frame
/// from `dataset` and `filters`; the only cache in the pipeline is the
/// mtime-keyed [`DatasetCache`].
pub struct AppState {
    /// Path of the scores CSV currently displayed.
    pub dataset_path: PathBuf,

    /// Mtime-keyed dataset cache.
    cache: DatasetCache,

    /// Most recently fetched dataset (None until the first successful load).
    pub dataset: Option<Arc<ScoreDataset>>,

    /// Filter selections for this session.
    pub filters: FilterState,

    /// Error message shown in the top bar.
    pub status_message: Option<String>,

    last_poll: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/top100avg.csv"),
            cache: DatasetCache::new(),
            dataset: None,
            filters: FilterState::default(),
            status_message: None,
            last_poll: None,
        }
    }
}

impl AppState {
    /// Re-fetch the dataset through the cache.  Called once per frame; the
    /// underlying mtime stat is throttled to roughly once per second, so a
    /// file edited on disk shows up within the next poll.
    pub fn poll_dataset(&mut self) {
        let due = self
            .last_poll
            .is_none_or(|t| t.elapsed() >= RELOAD_POLL_INTERVAL);
        if !due {
            return;
        }
        self.last_poll = Some(Instant::now());

        match self.cache.fetch(&self.dataset_path) {
            Ok(dataset) => {
                self.dataset = Some(dataset);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", self.dataset_path.display());
                self.dataset = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Point the dashboard at a different scores CSV and load it at once.
    pub fn set_dataset_path(&mut self, path: PathBuf) {
        self.dataset_path = path;
        self.last_poll = None;
        self.poll_dataset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_scores(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("scores.csv");
        let mut f = fs::File::create(&path).unwrap();
        writeln!(f, "Division,Sex,Event,Year,Points,Shift").unwrap();
        writeln!(f, "World,Women,100m,2020,1000,No").unwrap();
        path
    }

    #[test]
    fn poll_loads_the_dataset_and_clears_status() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::default();
        state.set_dataset_path(write_scores(&dir));

        let ds = state.dataset.as_ref().expect("dataset loaded");
        assert_eq!(ds.len(), 1);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn poll_surfaces_a_missing_file_as_status() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::default();
        state.set_dataset_path(dir.path().join("missing.csv"));

        assert!(state.dataset.is_none());
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.contains("not found"));
    }
}
