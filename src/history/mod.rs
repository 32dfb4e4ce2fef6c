//! Training history module for persistent score tracking
//!
//! This module provides:
//! - Session record and tuning-parameter types
//! - The checkpoint file structure and its best-score bookkeeping

mod types;

pub use types::{BestRun, SessionRecord, TrainingHistory, TuningParams};
