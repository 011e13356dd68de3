//! Balanced marks invariant: X leads O by zero or one.

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X always moves first and players alternate, so X can never trail O
/// and never be more than one mark ahead.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(game: &GameEngine) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or one more"
    }
}
