//! Outcome of a placement request.
//!
//! Invalid placements are not failures. The engine leaves its state alone
//! and hands back the reason so callers can log or ignore it.

use super::{GameStatus, Player, Position};
use serde::{Deserialize, Serialize};

/// Why a placement left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The index is not on the board.
    #[display("Index {} is outside 0-8", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over ({:?})", _0)]
    GameOver(GameStatus),
}

/// Result of [`crate::GameEngine::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was placed.
    Placed {
        /// Mark that was placed.
        mark: Player,
        /// Where it was placed.
        position: Position,
        /// Status after the placement.
        status: GameStatus,
    },
    /// Nothing changed.
    Ignored(Rejection),
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed { .. })
    }

    /// Returns the rejection, if the placement was ignored.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Placement::Placed { .. } => None,
            Placement::Ignored(rejection) => Some(*rejection),
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Placed { mark, position, .. } => write!(f, "{} -> {}", mark, position),
            Placement::Ignored(rejection) => write!(f, "ignored: {}", rejection),
        }
    }
}
