//! Status invariant: a finished game agrees with who moved last.

use super::super::{GameEngine, GameStatus, Player, Square};
use super::super::rules::LINES;
use super::Invariant;

/// Invariant: at most one player holds a complete line, and a winner is
/// always the player who made the last move.
///
/// X wins on its own move, leaving X one mark ahead; O wins leaving the
/// counts equal.
pub struct StatusConsistentInvariant;

fn holds_line(game: &GameEngine, player: Player) -> bool {
    let squares = game.board().squares();
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
}

impl Invariant<GameEngine> for StatusConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        if holds_line(game, Player::X) && holds_line(game, Player::O) {
            return false;
        }

        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        match game.status() {
            GameStatus::Won(Player::X) => x == o + 1,
            GameStatus::Won(Player::O) => x == o,
            GameStatus::Draw | GameStatus::InProgress => true,
        }
    }

    fn description() -> &'static str {
        "A won game has a single winner who made the last move"
    }
}
