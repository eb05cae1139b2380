mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod store;
mod workflow;

use clap::{Parser, Subcommand};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::summarize::{self, SummarizeArgs};
use crate::error::AppResult;

#[derive(Parser)]
#[command(
    name = "prsum",
    author,
    version,
    about = "Summarize a branch's changes with a language model",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Log each stage in detail.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(flatten)]
    summarize: SummarizeArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a branch's diff against the baseline (the default command).
    Summarize(SummarizeArgs),
    /// Inspect the resolved configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Config(args)) => config_cmd::run(args.command),
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => run_summarize(cli.summarize).await,
    }
}

async fn run_summarize(args: SummarizeArgs) -> AppResult<()> {
    let outcome = summarize::run(args).await?;

    if outcome.summary.is_empty() {
        eprintln!("Warning: the completion service returned an empty summary.");
    }
    println!(
        "Summary of {} written to {}",
        outcome.branch,
        outcome.path.display()
    );
    Ok(())
}
