//! Demo command implementation
//!
//! Usage: concierge demo
//!
//! Checks connectivity, runs the first few sample tasks against the live
//! deployment, scores each recommendation, and prints a summary table. A
//! failed task scores 0.0; the demo keeps going.

use anyhow::Result;
use colored::Colorize;

use crate::scoring;
use crate::selector::{Recommender, RoomSelector};
use crate::tasks::training_tasks;

/// How many sample tasks the demo runs
const DEMO_TASK_LIMIT: usize = 4;

/// Score at or above which a match counts as good
const SUCCESS_THRESHOLD: f64 = 0.6;

/// Execute the demo command
pub fn execute() -> Result<()> {
    println!("{}", "Room Selector Demo".bold().blue());
    println!("{}", "=".repeat(50));

    let tasks = training_tasks();
    println!("{} Loaded {} sample tasks", "✓".green(), tasks.len());

    let selector = RoomSelector::from_env()?;

    println!("{} Testing Azure OpenAI connection...", "ℹ".blue());
    let reply = selector.client().test_connection()?;
    let config = selector.client().config();
    println!("{} Connection successful", "✓".green());
    println!("  Endpoint:   {}", config.endpoint);
    println!("  Deployment: {}", config.deployment);
    println!("  Response:   {}", reply.trim());

    println!("\n{} Running room selection on sample tasks...", "▶".bold());

    let mut scores = Vec::new();
    for (i, task) in tasks.iter().take(DEMO_TASK_LIMIT).enumerate() {
        println!(
            "\n{} Task {}/{}: {}",
            "•".bold(),
            i + 1,
            DEMO_TASK_LIMIT.min(tasks.len()),
            task.id.cyan()
        );
        println!("  {}", task.description.dimmed());

        match selector.recommend(&task.user_input) {
            Ok(selection) => {
                let score = scoring::evaluate(task, &selection.recommendation);
                println!("  {} Score: {score:.3}", "✓".green());
                scores.push(score);
            }
            Err(e) => {
                println!("  {} Failed: {e}", "✗".red());
                scores.push(0.0);
            }
        }
    }

    print_summary(&scores);
    Ok(())
}

fn print_summary(scores: &[f64]) {
    if scores.is_empty() {
        return;
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    let best = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let worst = scores.iter().cloned().fold(f64::INFINITY, f64::min);
    let good = scores.iter().filter(|s| **s >= SUCCESS_THRESHOLD).count();
    let success_rate = good as f64 / scores.len() as f64 * 100.0;

    println!("\n{}", "=".repeat(50));
    println!("{}", "Demo Results".bold());
    println!("{:16} {}", "Tasks completed", scores.len());
    println!("{:16} {average:.3}", "Average score");
    println!("{:16} {best:.3}", "Best score");
    println!("{:16} {worst:.3}", "Worst score");
    println!(
        "{:16} {success_rate:.1}% (score ≥ {SUCCESS_THRESHOLD})",
        "Success rate"
    );
    println!("{}", "=".repeat(50));
}
