//! Players of a two-player game

use std::fmt::Display;

/// Identifies whose turn it is.
///
/// Carries no scoring polarity, the winner of a finished game is decided by
/// [`Position::outcome`](crate::position::Position::outcome) alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Opposite player
    #[inline(always)]
    #[must_use]
    pub const fn opposite(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "First"),
            Player::Second => write!(f, "Second"),
        }
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        if bool::arbitrary(g) {
            Player::First
        } else {
            Player::Second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::QuickCheck;

    #[test]
    fn opposite_is_involution() {
        let test = |p: Player| {
            assert_ne!(p, p.opposite());
            assert_eq!(p, p.opposite().opposite());
        };
        QuickCheck::new().quickcheck(test as fn(Player));
    }
}
