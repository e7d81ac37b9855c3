use anyhow::{Context, Result};
use clap::{self, Parser};
use nim::Position;

pub mod moves;
pub mod replay;

/// Starting heap configuration shared by all commands
#[derive(Parser, Debug, Clone)]
pub struct HeapArgs {
    /// Comma separated list of heap sizes
    #[arg(
        long,
        num_args = 1..,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = [7, 5, 3, 1]
    )]
    heaps: Vec<i64>,
}

impl HeapArgs {
    pub fn position(&self) -> Result<Position> {
        Position::initial(self.heaps.iter().copied())
            .with_context(|| format!("Invalid heap configuration {:?}", self.heaps))
    }
}
