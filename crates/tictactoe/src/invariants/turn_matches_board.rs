//! Turn invariant: the mark to move follows from the board.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: X moves when the counts are equal, O otherwise.
pub struct TurnMatchesBoardInvariant;

impl Invariant<GameEngine> for TurnMatchesBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let expected = if game.board().count(Player::X) == game.board().count(Player::O) {
            Player::X
        } else {
            Player::O
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Turn belongs to X on even move counts and to O on odd ones"
    }
}
