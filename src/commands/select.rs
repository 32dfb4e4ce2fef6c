//! Select command implementation
//!
//! Usage: concierge select
//!
//! Interactive single-task mode: reads requirements from stdin, prints the
//! recommendation, and loops until `quit` or end of input. A failed request
//! is reported and the loop continues.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;

use crate::selector::{Recommender, RoomSelector};

/// Execute the select command
pub fn execute() -> Result<()> {
    let selector = RoomSelector::from_env()?;

    println!("{}", "Interactive Room Selection".bold().blue());
    println!("Enter your requirements (type 'quit' to exit)\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Your requirements: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if matches!(input.to_lowercase().as_str(), "quit" | "exit" | "q") {
            break;
        }

        println!("\nAnalyzing your requirements...");
        match selector.recommend(input) {
            Ok(selection) => {
                println!("{} Room recommendation:", "✓".green());
                println!("{}", "─".repeat(30));
                println!("{}", selection.recommendation);
                println!("\nTokens used: {}", selection.tokens_used);
            }
            Err(e) => {
                println!("{} {e}", "✗".red());
            }
        }
        println!("\n{}\n", "=".repeat(50));
    }

    println!("Goodbye!");
    Ok(())
}
