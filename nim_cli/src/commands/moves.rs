use crate::commands::HeapArgs;
use anyhow::Result;
use clap::{self, Parser};
use itertools::Itertools;
use nim::{Move, Player, Position};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Report<'p> {
    position: &'p Position,
    to_move: Player,
    moves: Vec<Move>,
}

/// List legal moves of a starting position.
#[derive(Parser, Debug)]
pub struct Args {
    #[clap(flatten)]
    heaps: HeapArgs,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,
}

pub fn run(args: Args) -> Result<()> {
    let position = args.heaps.position()?;
    let moves = position.legal_moves();

    if args.json {
        let report = Report {
            position: &position,
            to_move: position.to_move(),
            moves,
        };
        println!("{}", serde_json::ser::to_string(&report)?);
    } else {
        println!("board: {}", position);
        println!("to move: {}", position.to_move());
        println!("moves ({}): {}", moves.len(), moves.iter().join(" "));
    }

    Ok(())
}
