//! Terminal front-end for exact matrix chain arithmetic.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod format;
mod repl;

#[derive(Parser, Debug)]
#[command(
    name = "chain_cli",
    about = "Exact-rational matrix chain calculator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build and evaluate a chain interactively
    Repl,
    /// Evaluate a JSON chain request and print a JSON reply
    EvalJson(commands::eval_json::EvalJsonArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => repl::run(),
        Command::EvalJson(args) => commands::eval_json::run(args),
    }
}
