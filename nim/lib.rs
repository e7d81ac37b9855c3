//! Misère Nim rule engine.
//!
//! Positions are immutable values holding heap sizes and the player on turn.
//! The engine enumerates [legal moves](crate::position::Position::legal_moves),
//! [applies](crate::position::Position::apply) them to produce new positions and
//! scores finished games under the misère convention: the player who takes the
//! last object loses.
//!
//! Search algorithms plug in through the [`Game`](crate::game::Game) trait.
//!
//! ```
//! use nim::{Move, Outcome, Player, Position};
//!
//! let start = Position::initial([3, 1]).unwrap();
//! assert_eq!(start.legal_moves().len(), 4);
//!
//! let end = start
//!     .apply(Move::new(0, 3))
//!     .and_then(|p| p.apply(Move::new(1, 1)))
//!     .unwrap();
//! assert!(end.is_terminal());
//! assert_eq!(end.to_move(), Player::First);
//! assert_eq!(end.outcome(), Outcome::FirstWins);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod game;
pub mod outcome;
pub mod player;
pub mod position;

mod display;
mod parsing;

pub use error::{Error, IllegalMove, InvalidConfiguration};
pub use game::{Game, Nim};
pub use outcome::Outcome;
pub use player::Player;
pub use position::{Move, Position};
