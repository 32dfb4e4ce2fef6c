use anyhow::Result;
use clap::{Parser, Subcommand};
use concierge::commands::{connection, demo, history, select, train};
use concierge::{logging, trainer};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "concierge")]
#[command(about = "Persistent prompt-evaluation trainer for hotel room selection", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a persistent training session over the task fixtures
    Train {
        /// Number of iterations over the task list
        #[arg(short, long, default_value_t = trainer::DEFAULT_ITERATIONS,
              value_parser = clap::value_parser!(u32).range(1..))]
        iterations: u32,

        /// Path to the checkpoint file (default: ./apo_training_history.json)
        #[arg(short, long)]
        checkpoint: Option<PathBuf>,
    },

    /// Score the sample tasks against the live deployment and summarize
    Demo,

    /// Interactively request recommendations for your own requirements
    Select,

    /// Show recorded training sessions and the best score
    History {
        /// Path to the checkpoint file (default: ./apo_training_history.json)
        #[arg(short, long)]
        checkpoint: Option<PathBuf>,
    },

    /// Check connectivity to the configured Azure OpenAI deployment
    TestConnection,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            iterations,
            checkpoint,
        } => train::execute(iterations, checkpoint),
        Commands::Demo => demo::execute(),
        Commands::Select => select::execute(),
        Commands::History { checkpoint } => history::execute(checkpoint),
        Commands::TestConnection => connection::execute(),
    }
}
