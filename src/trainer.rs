//! Training session driver.
//!
//! One session runs the full task list for a configured number of
//! iterations, scoring every recommendation. A failed chat call scores 0.0
//! and the session keeps going; only the record ever reaches the store.

use std::time::Instant;

use chrono::Utc;
use tracing::{error, info};

use crate::history::{SessionRecord, TuningParams};
use crate::scoring;
use crate::selector::Recommender;
use crate::tasks::RoomTask;

/// Default number of iterations per training session
pub const DEFAULT_ITERATIONS: u32 = 3;

/// Run one training session and produce its record.
///
/// The record's `best_score_updated` flag is left false here; it is decided
/// by `TrainingHistory::record_session` when the record is appended.
pub fn run_session(
    recommender: &dyn Recommender,
    tasks: &[RoomTask],
    iterations: u32,
    params: TuningParams,
) -> SessionRecord {
    info!("starting training session with {iterations} iterations");

    let started_at = Utc::now();
    let clock = Instant::now();
    let mut iteration_averages = Vec::with_capacity(iterations as usize);

    for iteration in 0..iterations {
        info!("training iteration {}/{iterations}", iteration + 1);
        let mut scores = Vec::with_capacity(tasks.len());

        for task in tasks {
            let score = match recommender.recommend(&task.user_input) {
                Ok(selection) => {
                    let score = scoring::evaluate(task, &selection.recommendation);
                    info!("task '{}' scored: {score:.2}", task.id);
                    score
                }
                Err(e) => {
                    error!("task '{}' failed: {e}", task.id);
                    0.0
                }
            };
            scores.push(score);
        }

        let average = mean(&scores);
        info!("iteration {} average score: {average:.2}", iteration + 1);
        iteration_averages.push(average);
    }

    SessionRecord {
        timestamp: started_at,
        duration_seconds: clock.elapsed().as_secs_f64(),
        iterations,
        average_score: mean(&iteration_averages),
        scores: iteration_averages,
        best_score_updated: false,
        task_count: tasks.len(),
        params,
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
