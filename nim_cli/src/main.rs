use crate::commands::*;
use anyhow::Result;
use clap::{self, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod io;

#[derive(Subcommand, Debug)]
enum Command {
    Moves(moves::Args),
    Replay(replay::Args),
}

#[derive(Parser)]
struct Args {
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Moves(args) => moves::run(args),
        Command::Replay(args) => replay::run(args),
    }
}
