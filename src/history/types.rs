//! Training history types for persistent score and configuration tracking
//!
//! One `SessionRecord` is appended per training session. The containing
//! `TrainingHistory` keeps a running best score and the configuration of the
//! run that achieved it, so later sessions can start from the best-known
//! tuning parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tuning parameters handed to the external prompt optimizer.
///
/// The optimizer itself is an opaque collaborator; these five knobs are
/// carried through the checkpoint file so the best-performing set survives
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningParams {
    /// Validation batch size
    pub val_batch_size: usize,
    /// Gradient computation batch size
    pub gradient_batch_size: usize,
    /// Search beam width
    pub beam_width: usize,
    /// Branching factor for prompt alternatives
    pub branch_factor: usize,
    /// Number of optimization rounds
    pub beam_rounds: usize,
}

impl Default for TuningParams {
    fn default() -> Self {
        Self {
            val_batch_size: 5,
            gradient_batch_size: 2,
            beam_width: 1,
            branch_factor: 1,
            beam_rounds: 1,
        }
    }
}

/// Record of one completed training session.
///
/// Appended to the history once the session finishes, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// When the session started
    pub timestamp: DateTime<Utc>,
    /// Wall-clock duration of the session
    pub duration_seconds: f64,
    /// Number of iterations over the task list
    pub iterations: u32,
    /// Average score of each iteration, in order
    pub scores: Vec<f64>,
    /// Mean of the iteration averages
    pub average_score: f64,
    /// Whether this session raised the all-time best score
    pub best_score_updated: bool,
    /// Number of tasks evaluated per iteration
    pub task_count: usize,
    /// Tuning parameters the session ran with
    #[serde(default)]
    pub params: TuningParams,
}

/// The best-performing run so far
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestRun {
    /// When the winning session started
    pub timestamp: DateTime<Utc>,
    /// Its average score
    pub score: f64,
    /// The tuning parameters it ran with
    pub params: TuningParams,
}

/// The checkpoint file contents.
///
/// Owned exclusively by the history store: read at process start, written
/// back at process end. `best_score` always equals the maximum
/// `average_score` across `history` unless the file was hand-edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingHistory {
    /// All session records, oldest first
    #[serde(default)]
    pub history: Vec<SessionRecord>,
    /// Best session average score seen so far
    #[serde(default)]
    pub best_score: f64,
    /// The run that achieved `best_score`, if any session scored above zero
    #[serde(default)]
    pub best_run: Option<BestRun>,
    /// When the checkpoint was last written
    pub last_updated: DateTime<Utc>,
    /// Total number of recorded sessions
    #[serde(default)]
    pub total_sessions: usize,
}

impl Default for TrainingHistory {
    fn default() -> Self {
        Self {
            history: Vec::new(),
            best_score: 0.0,
            best_run: None,
            last_updated: Utc::now(),
            total_sessions: 0,
        }
    }
}

impl TrainingHistory {
    /// Append a session record and update the best-score bookkeeping.
    ///
    /// The record's `best_score_updated` flag is set here, based on whether
    /// its average strictly beats the previous best. Returns the flag.
    pub fn record_session(&mut self, mut record: SessionRecord) -> bool {
        let improved = record.average_score > self.best_score;
        record.best_score_updated = improved;

        if improved {
            self.best_score = record.average_score;
            self.best_run = Some(BestRun {
                timestamp: record.timestamp,
                score: record.average_score,
                params: record.params.clone(),
            });
        }

        self.history.push(record);
        self.total_sessions = self.history.len();
        self.last_updated = Utc::now();

        improved
    }

    /// Tuning parameters of the historically best run, or the hard-coded
    /// defaults when no successful run exists.
    pub fn best_params_or_default(&self) -> TuningParams {
        match &self.best_run {
            Some(best) if self.best_score > 0.0 => best.params.clone(),
            _ => TuningParams::default(),
        }
    }

    /// The most recent session, if any
    pub fn last_session(&self) -> Option<&SessionRecord> {
        self.history.last()
    }

    /// Check that `best_score` matches the maximum recorded average.
    ///
    /// Holds after every `record_session`; a hand-edited or corrupted file
    /// is the only way to break it.
    pub fn best_score_consistent(&self) -> bool {
        let max = self
            .history
            .iter()
            .map(|r| r.average_score)
            .fold(0.0_f64, f64::max);
        self.best_score == max
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
