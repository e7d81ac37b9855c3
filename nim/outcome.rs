//! Result of a finished game

use crate::player::Player;
use std::fmt::Display;

/// Verdict on a position, only decided once the position is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Game is still in progress
    Undetermined,

    /// First player won
    FirstWins,

    /// Second player won
    SecondWins,
}

impl Outcome {
    /// Outcome in which `player` is the winner
    #[inline]
    pub const fn won_by(player: Player) -> Outcome {
        match player {
            Player::First => Outcome::FirstWins,
            Player::Second => Outcome::SecondWins,
        }
    }

    /// Winning player, if any
    #[inline]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Outcome::Undetermined => None,
            Outcome::FirstWins => Some(Player::First),
            Outcome::SecondWins => Some(Player::Second),
        }
    }

    /// Signed score from the perspective of `player`: `1` for a win, `-1` for
    /// a loss and `0` while the game is undetermined
    pub fn utility(self, player: Player) -> i8 {
        match self.winner() {
            None => 0,
            Some(winner) if winner == player => 1,
            Some(_) => -1,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            None => write!(f, "undetermined"),
            Some(winner) => write!(f, "{winner} wins"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_is_signed_by_perspective() {
        assert_eq!(Outcome::FirstWins.utility(Player::First), 1);
        assert_eq!(Outcome::FirstWins.utility(Player::Second), -1);
        assert_eq!(Outcome::SecondWins.utility(Player::Second), 1);
        assert_eq!(Outcome::SecondWins.utility(Player::First), -1);
        assert_eq!(Outcome::Undetermined.utility(Player::First), 0);
        assert_eq!(Outcome::Undetermined.utility(Player::Second), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Outcome::Undetermined.to_string(), "undetermined");
        assert_eq!(Outcome::won_by(Player::Second).to_string(), "Second wins");
    }
}
