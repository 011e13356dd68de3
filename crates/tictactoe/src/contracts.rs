//! Contract for placing a mark.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. The precondition decides whether a placement happens at
//! all; the postcondition checks the transition afterwards.

use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::placement::Rejection;
use super::{GameEngine, Position, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Value produced by a satisfied precondition.
    type Accepted;
    /// Reason a precondition does not hold.
    type Rejected;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Accepted, Self::Rejected>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    pub fn check(game: &GameEngine) -> Result<(), Rejection> {
        let status = game.status();
        if status.is_over() {
            Err(Rejection::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index names an empty square.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition and resolves the index to a position.
    pub fn check(index: usize, game: &GameEngine) -> Result<Position, Rejection> {
        let position = Position::from_index(index).ok_or(Rejection::OutOfRange(index))?;
        if game.board().is_empty(index) {
            Ok(position)
        } else {
            Err(Rejection::Occupied(position))
        }
    }
}

/// Placement contract.
///
/// Preconditions:
/// - Game is still in progress
/// - Index is on the board and the square is empty
///
/// Postconditions:
/// - Exactly one square went from empty to the mover's mark; none changed otherwise
/// - The turn passed to the opponent
/// - All [`TicTacToeInvariants`] hold
pub struct PlaceContract;

impl Contract<GameEngine, usize> for PlaceContract {
    type Accepted = Position;
    type Rejected = Rejection;

    fn pre(game: &GameEngine, index: &usize) -> Result<Position, Rejection> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(*index, game)
    }

    #[instrument(skip(before, after))]
    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let changed: Vec<(Square, Square)> = before
            .board()
            .squares()
            .iter()
            .zip(after.board().squares())
            .filter(|(old, new)| old != new)
            .map(|(old, new)| (*old, *new))
            .collect();
        let monotonic = matches!(
            changed.as_slice(),
            [(Square::Empty, Square::Occupied(mark))] if *mark == before.turn()
        );
        if !monotonic {
            violations.push(InvariantViolation::new(
                "Exactly one empty square is filled with the mover's mark",
            ));
        }

        if after.turn() != before.turn().opponent() {
            violations.push(InvariantViolation::new("Turn passes to the opponent"));
        }

        if let Err(mut found) = TicTacToeInvariants::check_all(after) {
            violations.append(&mut found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                warn!(description = %violation.description, "Postcondition violated");
            }
            Err(violations)
        }
    }
}
