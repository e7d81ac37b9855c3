//! Heap positions of misère Nim and the rules that move between them

use crate::{
    display,
    error::{IllegalMove, InvalidConfiguration},
    outcome::Outcome,
    parsing::{Parser, impl_from_str_via_parser, lexeme, try_option},
    player::Player,
};
use log::{debug, trace};
use std::{fmt::Display, str::FromStr};

/// Removal of `amount` objects from the heap at index `heap`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    /// Index of the heap to take from
    pub heap: usize,

    /// Number of objects to remove, legal moves never remove zero
    pub amount: u32,
}

impl Move {
    /// Construct new move
    #[inline]
    pub const fn new(heap: usize, amount: u32) -> Move {
        Move { heap, amount }
    }

    /// Parse either `heap:amount` or `(heap, amount)`
    fn parse(p: Parser<'_>) -> Option<(Parser<'_>, Move)> {
        let p = p.trim_whitespace();
        let (p, parenthesized) = match p.parse_ascii_char('(') {
            Some(p) => (p, true),
            None => (p, false),
        };
        let (p, heap) = try_option!(lexeme!(p, Parser::parse_u32));
        let p = match (parenthesized, p.parse_ascii_char(',')) {
            (true, Some(p)) => p,
            (false, None) => try_option!(p.parse_ascii_char(':')),
            _ => return None,
        };
        let (p, amount) = try_option!(lexeme!(p, Parser::parse_u32));
        let p = if parenthesized {
            try_option!(p.parse_ascii_char(')')).trim_whitespace()
        } else {
            p
        };
        Some((p, Move::new(heap as usize, amount)))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::parens(f, |f| write!(f, "{}, {}", self.heap, self.amount))
    }
}

impl_from_str_via_parser!(Move);

/// Position of misère Nim: heap sizes and the player on turn.
///
/// Positions are immutable, [`Position::apply`] returns a new one and leaves
/// the original untouched so callers may keep it for backtracking. Legal moves
/// and terminality are always derived from the heaps, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    heaps: Vec<u32>,
    to_move: Player,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display::brackets(f, |f| display::commas(f, self.heaps()))
    }
}

impl Position {
    /// Starting position with [`Player::First`] to move
    #[inline]
    pub const fn new(heaps: Vec<u32>) -> Position {
        Position {
            heaps,
            to_move: Player::First,
        }
    }

    /// Starting position built from caller supplied heap sizes, which are
    /// copied. Fails if any size is negative or too large to be a heap.
    ///
    /// # Errors
    /// - [`InvalidConfiguration::OutOfRange`] for the first entry that does
    ///   not convert to an object count
    pub fn initial<I, T>(heaps: I) -> Result<Position, InvalidConfiguration>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<u32> + Copy + Display,
    {
        let heaps = heaps
            .into_iter()
            .enumerate()
            .map(|(index, size)| {
                size.try_into()
                    .map_err(|_| InvalidConfiguration::OutOfRange {
                        index,
                        value: size.to_string(),
                    })
            })
            .collect::<Result<Vec<u32>, _>>()
            .inspect_err(|err| debug!("Rejected heap configuration: {err}"))?;

        debug!("New game on {heaps:?}");
        Ok(Position::new(heaps))
    }

    /// Heap sizes, indexed from zero
    #[inline]
    pub fn heaps(&self) -> &[u32] {
        &self.heaps
    }

    /// Player on turn
    #[inline]
    pub const fn to_move(&self) -> Player {
        self.to_move
    }

    /// Total number of objects left on the board
    pub fn total(&self) -> u64 {
        self.heaps.iter().map(|&h| u64::from(h)).sum()
    }

    /// Lazily enumerate legal moves, by heap index then by amount, both ascending
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.heaps
            .iter()
            .enumerate()
            .flat_map(|(heap, &size)| (1..=size).map(move |amount| Move::new(heap, amount)))
    }

    /// All legal moves in canonical order, empty iff the position is terminal
    pub fn legal_moves(&self) -> Vec<Move> {
        self.moves().collect()
    }

    /// Check that `mv` can be played, returning the size of the heap it takes from
    fn check(&self, mv: Move) -> Result<u32, IllegalMove> {
        let available = *self.heaps.get(mv.heap).ok_or(IllegalMove::HeapOutOfRange {
            heap: mv.heap,
            heaps: self.heaps.len(),
        })?;

        if mv.amount == 0 {
            return Err(IllegalMove::ZeroAmount { heap: mv.heap });
        }

        if mv.amount > available {
            return Err(IllegalMove::AmountExceedsHeap {
                heap: mv.heap,
                amount: mv.amount,
                available,
            });
        }

        Ok(available)
    }

    /// Check if `mv` is legal in this position
    #[inline]
    pub fn is_legal(&self, mv: Move) -> bool {
        self.check(mv).is_ok()
    }

    /// Play `mv`, producing the successor position with the other player on turn.
    ///
    /// # Errors
    /// - [`IllegalMove`] if the heap does not exist or the amount is zero or
    ///   larger than the heap. Nothing is ever clamped.
    pub fn apply(&self, mv: Move) -> Result<Position, IllegalMove> {
        let available = self
            .check(mv)
            .inspect_err(|err| debug!("Rejected move {mv} on {self}: {err}"))?;

        let mut heaps = self.heaps.clone();
        heaps[mv.heap] = available - mv.amount;
        let next = Position {
            heaps,
            to_move: self.to_move.opposite(),
        };

        trace!("{} played {mv}: {self} -> {next}", self.to_move);
        Ok(next)
    }

    /// Every legal move paired with the position it leads to, in [`Position::moves`] order
    pub fn successors(&self) -> impl Iterator<Item = (Move, Position)> + '_ {
        self.moves().map(|mv| {
            let mut heaps = self.heaps.clone();
            heaps[mv.heap] -= mv.amount;
            let next = Position {
                heaps,
                to_move: self.to_move.opposite(),
            };
            (mv, next)
        })
    }

    /// Check if every heap is empty
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.heaps.iter().all(|&h| h == 0)
    }

    /// Winner of a finished game.
    ///
    /// Misère convention: whoever removed the last object lost, so the player
    /// on turn at the empty board wins. Non-terminal positions are
    /// [`Outcome::Undetermined`].
    pub fn outcome(&self) -> Outcome {
        if self.is_terminal() {
            Outcome::won_by(self.to_move)
        } else {
            Outcome::Undetermined
        }
    }

    /// Signed score of the position for `player`, see [`Outcome::utility`]
    #[inline]
    pub fn utility(&self, player: Player) -> i8 {
        self.outcome().utility(player)
    }

    fn parse(p: Parser<'_>) -> Result<Vec<u32>, InvalidConfiguration> {
        const SEPARATORS: &[char] = &[',', ']'];

        let p = p.trim_whitespace();
        let (mut p, bracketed) = match p.parse_ascii_char('[') {
            Some(p) => (p.trim_whitespace(), true),
            None => (p, false),
        };

        let mut heaps = Vec::new();
        loop {
            if bracketed {
                if let Some(rest) = p.parse_ascii_char(']') {
                    if !rest.trim_whitespace().is_empty() {
                        return Err(InvalidConfiguration::Malformed);
                    }
                    break;
                }
            } else if p.is_empty() {
                break;
            }

            let index = heaps.len();
            let (rest, token) = p.parse_token(SEPARATORS);
            if token.is_empty() {
                return Err(InvalidConfiguration::Malformed);
            }
            let size = match Parser::new(token).parse_i64() {
                Some((leftover, size)) if leftover.is_empty() => size,
                _ if token.bytes().any(|b| b.is_ascii_digit())
                    && token.trim_start_matches('-').bytes().all(|b| b.is_ascii_digit()) =>
                {
                    return Err(InvalidConfiguration::OutOfRange {
                        index,
                        value: token.to_owned(),
                    });
                }
                _ => {
                    return Err(InvalidConfiguration::NotAnInteger {
                        index,
                        token: token.to_owned(),
                    });
                }
            };
            let size = u32::try_from(size).map_err(|_| InvalidConfiguration::OutOfRange {
                index,
                value: token.to_owned(),
            })?;
            heaps.push(size);

            let rest = rest.trim_whitespace();
            p = rest.parse_ascii_char(',').unwrap_or(rest).trim_whitespace();
        }

        Ok(heaps)
    }
}

impl FromStr for Position {
    type Err = InvalidConfiguration;

    /// Parse heap sizes written as `[7, 5, 3, 1]`, `7,5,3,1` or `7 5 3 1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::parse(Parser::new(s))
            .inspect_err(|err| debug!("Rejected heap configuration {s:?}: {err}"))
            .map(Position::new)
    }
}

#[cfg(any(test, feature = "quickcheck"))]
impl quickcheck::Arbitrary for Position {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        let heaps = (0..usize::arbitrary(g) % 5)
            .map(|_| u32::arbitrary(g) % 6)
            .collect();
        Position {
            heaps,
            to_move: Player::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        use quickcheck::Arbitrary;

        let to_move = self.to_move;
        Box::new(self.heaps.shrink().map(move |heaps| Position { heaps, to_move }))
    }
}
