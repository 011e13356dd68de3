//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine never stores a status of its
//! own; it asks [`evaluate`] after every mutation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from a board.
///
/// Lines are checked in [`LINES`] order and the first complete one decides
/// the winner. Otherwise a full board is a draw and anything else is still
/// in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
