use crate::{commands::HeapArgs, io::FileOrStdout};
use anyhow::{Context, Result};
use clap::{self, Parser};
use nim::{Move, Outcome, Player, Position};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize)]
struct Step<'p> {
    ply: usize,
    played: Option<Move>,
    position: &'p Position,
    to_move: Player,
    terminal: bool,
    outcome: Outcome,
}

/// Apply a sequence of moves to a starting position and report every step.
#[derive(Parser, Debug)]
pub struct Args {
    #[clap(flatten)]
    heaps: HeapArgs,

    /// Comma separated moves, each written as `heap:amount`
    #[arg(long, num_args = 0.., value_delimiter = ',')]
    moves: Vec<Move>,

    /// Print one JSON object per step instead of plain text
    #[arg(long)]
    json: bool,

    /// Output path or `-` for stdout
    #[arg(long, default_value_t = FileOrStdout::FileOrStdout)]
    output: FileOrStdout,
}

fn report(
    output: &mut impl Write,
    json: bool,
    ply: usize,
    played: Option<Move>,
    position: &Position,
) -> Result<()> {
    let step = Step {
        ply,
        played,
        position,
        to_move: position.to_move(),
        terminal: position.is_terminal(),
        outcome: position.outcome(),
    };

    if json {
        writeln!(output, "{}", serde_json::ser::to_string(&step)?)?;
    } else {
        if let Some(mv) = step.played {
            writeln!(output, "move {}: {}", step.ply, mv)?;
        }
        writeln!(output, "board: {}", step.position)?;
        writeln!(output, "next player: {}", step.to_move)?;
    }
    Ok(())
}

pub fn run(args: Args) -> Result<()> {
    let mut output = args.output.create()?;
    let mut position = args.heaps.position()?;
    debug!(%position, moves = args.moves.len(), "Replaying");

    report(&mut output, args.json, 0, None, &position)?;
    for (idx, mv) in args.moves.iter().copied().enumerate() {
        let ply = idx + 1;
        position = position
            .apply(mv)
            .with_context(|| format!("Move {ply} {mv} is illegal on {position}"))?;
        report(&mut output, args.json, ply, Some(mv), &position)?;
    }

    if !args.json {
        writeln!(output, "terminal: {}", position.is_terminal())?;
        writeln!(output, "outcome: {}", position.outcome())?;
    }
    output.flush()?;

    info!(outcome = %position.outcome(), "Replay finished");
    Ok(())
}
