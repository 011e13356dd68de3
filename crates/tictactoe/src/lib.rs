//! Tic-tac-toe game logic.
//!
//! A [`GameEngine`] owns a 3x3 [`Board`] and the [`Player`] to move. Its
//! [`GameStatus`] is always derived from the board by [`rules::evaluate`].
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut game = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.place(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! game.restart();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.turn(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod invariants;
mod message;
mod placement;
mod position;
pub mod rules;
mod types;

pub use contracts::{Contract, GameNotOver, PlaceContract, SquareIsEmpty};
pub use engine::{GameEngine, Snapshot};
pub use invariants::{
    BalancedMarksInvariant, Invariant, InvariantSet, InvariantViolation,
    StatusConsistentInvariant, TicTacToeInvariants, TurnMatchesBoardInvariant,
};
pub use message::StatusMessage;
pub use placement::{Placement, Rejection};
pub use position::Position;
pub use rules::evaluate;
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Square};

/// Alias used by renderers: a mark is the player who placed it.
pub type Mark = Player;
