//! Train command implementation
//!
//! Usage: concierge train [--iterations N] [--checkpoint PATH]
//!
//! Loads the checkpoint, runs one training session with the best-known
//! tuning parameters, appends the session record, and writes the checkpoint
//! back. The store is advisory: persistence failures never abort training.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::fs::history::HistoryStore;
use crate::history::TrainingHistory;
use crate::selector::RoomSelector;
use crate::tasks::training_tasks;
use crate::trainer;

/// Execute the train command
pub fn execute(iterations: u32, checkpoint: Option<PathBuf>) -> Result<()> {
    let store = match checkpoint {
        Some(path) => HistoryStore::new(path),
        None => HistoryStore::default_location(),
    };

    let mut history = store.load();

    println!("{}", "concierge Training".bold().blue());
    println!("{}", "=".repeat(50));

    if history.is_empty() {
        println!("{} No previous sessions, starting fresh", "ℹ".blue());
    } else {
        println!(
            "{} Loaded checkpoint: {} sessions, best score {:.2}",
            "ℹ".blue(),
            history.total_sessions,
            history.best_score
        );
    }

    let params = history.best_params_or_default();
    if history.best_run.is_some() {
        println!(
            "{} Using tuning parameters from best run (score: {:.3})",
            "✓".green(),
            history.best_score
        );
    } else {
        println!("{} No winning run yet, using default tuning parameters", "ℹ".blue());
    }

    // Configuration errors are fatal; everything after this is fail-open.
    let selector = RoomSelector::from_env()?;

    let tasks = training_tasks();
    println!("\n{} Starting training session...\n", "▶".bold());

    let record = trainer::run_session(&selector, &tasks, iterations, params);
    let improved = history.record_session(record);

    store.save(&history);

    print_session_summary(&history, improved);
    Ok(())
}

/// Print a summary of the session that was just recorded
fn print_session_summary(history: &TrainingHistory, improved: bool) {
    let Some(session) = history.last_session() else {
        return;
    };

    println!("\n{}", "=".repeat(50));
    println!("{}", "Training Session Complete".bold().green());
    println!("{}", "=".repeat(50));
    println!("  Average score:  {:.2}", session.average_score);
    println!("  Best score:     {:.2}", history.best_score);
    println!("  Duration:       {:.1}s", session.duration_seconds);
    println!("  Iterations:     {}", session.iterations);
    println!("  Total sessions: {}", history.total_sessions);

    if history.history.len() > 1 {
        let previous = &history.history[history.history.len() - 2];
        let delta = session.average_score - previous.average_score;
        println!("  Improvement:    {delta:+.2}");
    }

    if improved {
        println!("\n🎉 New best score achieved!");
    }

    println!("{}", "=".repeat(50));
}
