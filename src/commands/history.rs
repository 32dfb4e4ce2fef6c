//! History command implementation
//!
//! Usage: concierge history [--checkpoint PATH]
//!
//! Prints the recorded sessions as a table, the recent score trend, and the
//! all-time best.

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use crate::fs::history::HistoryStore;

/// Number of trailing sessions the trend indicator considers
const TREND_WINDOW: usize = 5;

/// Execute the history command
pub fn execute(checkpoint: Option<PathBuf>) -> Result<()> {
    let store = match checkpoint {
        Some(path) => HistoryStore::new(path),
        None => HistoryStore::default_location(),
    };

    let history = store.load();

    if history.is_empty() {
        println!("{} No training history available", "ℹ".blue());
        return Ok(());
    }

    println!("{}", "Training History".bold().blue());
    println!("{}", "─".repeat(60));
    println!(
        "{:>4} {:18} {:>8} {:>10} {:>6}",
        "#".bold(),
        "DATE".bold(),
        "SCORE".bold(),
        "DURATION".bold(),
        "BEST".bold()
    );

    for (i, session) in history.history.iter().enumerate() {
        let best_marker = if session.best_score_updated { "✓" } else { "" };
        println!(
            "{:>4} {:18} {:>8.2} {:>9.1}s {:>6}",
            i + 1,
            session.timestamp.format("%Y-%m-%d %H:%M"),
            session.average_score,
            session.duration_seconds,
            best_marker.green()
        );
    }

    println!("{}", "─".repeat(60));

    if history.history.len() >= 2 {
        let recent: Vec<f64> = history
            .history
            .iter()
            .rev()
            .take(TREND_WINDOW)
            .rev()
            .map(|s| s.average_score)
            .collect();

        let trend = if recent[recent.len() - 1] > recent[0] {
            "improving".green()
        } else {
            "declining".yellow()
        };
        println!("Recent trend: {trend} (last {} sessions)", recent.len());
    }

    println!("Best score: {}", format!("{:.2}", history.best_score).bold());

    Ok(())
}
