mod score;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "receipts-cli")]
#[command(about = "Score receipts offline without running the service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the per-rule point breakdown for receipt JSON files.
    Score {
        /// Files holding one receipt object or an array of receipts.
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Emit JSON instead of a text table.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Score { files, json } => score::run_score(&files, json)?,
    }

    Ok(())
}
