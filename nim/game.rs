//! Interface between game rules and adversarial search

use crate::{
    error::{IllegalMove, InvalidConfiguration},
    player::Player,
    position::{Move, Position},
};
use std::fmt::Display;

/// Two-player, perfect-information, zero-sum game as seen by a search algorithm.
///
/// Implementors own the rules only. Searches read positions through these
/// methods and never mutate them, so any number of searches may share one
/// position.
pub trait Game {
    /// Immutable game state
    type Position: Clone;

    /// Action that takes one position to the next
    type Move: Copy;

    /// Participant identifier
    type Player: Copy + Eq;

    /// Position the game starts from
    fn initial(&self) -> Self::Position;

    /// Player on turn in `position`
    fn to_move(&self, position: &Self::Position) -> Self::Player;

    /// Legal moves in `position`, in a deterministic order
    fn actions(&self, position: &Self::Position) -> Vec<Self::Move>;

    /// Position reached by playing `mv` in `position`
    ///
    /// # Errors
    /// - [`IllegalMove`] if `mv` is not one of [`Game::actions`]
    fn result(
        &self,
        position: &Self::Position,
        mv: Self::Move,
    ) -> Result<Self::Position, IllegalMove>;

    /// Check if the game has ended
    fn is_terminal(&self, position: &Self::Position) -> bool;

    /// Score of `position` for `player`: positive for a win, negative for a
    /// loss, zero if the game is not over
    fn utility(&self, position: &Self::Position, player: Self::Player) -> i8;
}

/// Misère Nim played from a fixed heap configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nim {
    start: Position,
}

impl Display for Nim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nim{}", self.start)
    }
}

impl Nim {
    /// Game starting from `heaps` with [`Player::First`] to move
    ///
    /// # Errors
    /// - [`InvalidConfiguration`] if any heap size is negative or too large
    pub fn new<I, T>(heaps: I) -> Result<Nim, InvalidConfiguration>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<u32> + Copy + Display,
    {
        Ok(Nim {
            start: Position::initial(heaps)?,
        })
    }
}

impl From<Position> for Nim {
    fn from(start: Position) -> Self {
        Nim { start }
    }
}

impl Game for Nim {
    type Position = Position;
    type Move = Move;
    type Player = Player;

    fn initial(&self) -> Position {
        self.start.clone()
    }

    #[inline]
    fn to_move(&self, position: &Position) -> Player {
        position.to_move()
    }

    #[inline]
    fn actions(&self, position: &Position) -> Vec<Move> {
        position.legal_moves()
    }

    #[inline]
    fn result(&self, position: &Position, mv: Move) -> Result<Position, IllegalMove> {
        position.apply(mv)
    }

    #[inline]
    fn is_terminal(&self, position: &Position) -> bool {
        position.is_terminal()
    }

    #[inline]
    fn utility(&self, position: &Position, player: Player) -> i8 {
        position.utility(player)
    }
}
