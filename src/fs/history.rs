//! Checkpoint file I/O for the training history
//!
//! Handles reading and writing `apo_training_history.json`. The store is
//! advisory, not authoritative: every I/O failure is logged and swallowed so
//! the caller always gets a usable structure. A corrupted checkpoint means
//! "no history", not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::history::TrainingHistory;

/// Default checkpoint filename, created in the working directory
pub const DEFAULT_HISTORY_FILE: &str = "apo_training_history.json";

/// Persistent store for the training history checkpoint file
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default path in the current working directory
    pub fn default_location() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the training history from the checkpoint file.
    ///
    /// A missing file starts fresh; an unreadable or malformed file is
    /// logged and treated as fresh. Never fails.
    pub fn load(&self) -> TrainingHistory {
        if !self.path.exists() {
            info!("no checkpoint found at {}, starting fresh", self.path.display());
            return TrainingHistory::default();
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("failed to read checkpoint {}: {e}", self.path.display());
                return TrainingHistory::default();
            }
        };

        match serde_json::from_str::<TrainingHistory>(&content) {
            Ok(history) => {
                info!(
                    "loaded checkpoint: {} sessions, best score {:.2}",
                    history.total_sessions, history.best_score
                );
                history
            }
            Err(e) => {
                warn!(
                    "failed to parse checkpoint {}: {e}; treating as empty",
                    self.path.display()
                );
                TrainingHistory::default()
            }
        }
    }

    /// Save the training history to the checkpoint file.
    ///
    /// Failures are logged and swallowed; the in-memory state remains the
    /// source of truth for the rest of the process.
    pub fn save(&self, history: &TrainingHistory) {
        match self.try_save(history) {
            Ok(()) => info!(
                "checkpoint saved: {} sessions to {}",
                history.total_sessions,
                self.path.display()
            ),
            Err(e) => error!("failed to save checkpoint {}: {e}", self.path.display()),
        }
    }

    fn try_save(&self, history: &TrainingHistory) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
