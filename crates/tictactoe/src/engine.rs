//! Tic-tac-toe game engine.
//!
//! The engine owns the board and the turn. Status is never stored: every
//! read goes through [`rules::evaluate`], so it cannot drift from the board.

use super::contracts::{Contract, PlaceContract};
use super::placement::Placement;
use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Single game session: board plus the mark that moves next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) turn: Player,
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board.
    pub board: Board,
    /// Mark that moves next.
    pub turn: Player,
    /// Derived status.
    pub status: GameStatus,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status, derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Returns true if a mark could be placed at `index` right now.
    pub fn is_playable(&self, index: usize) -> bool {
        PlaceContract::pre(self, &index).is_ok()
    }

    /// Returns the empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Captures board, turn and status.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board,
            turn: self.turn,
            status: self.status(),
        }
    }

    /// Places the current mark at `index` (0-8).
    ///
    /// Occupied squares, out-of-range indices and finished games leave the
    /// engine unchanged; the returned [`Placement`] says why.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, index: usize) -> Placement {
        let position = match PlaceContract::pre(self, &index) {
            Ok(position) => position,
            Err(rejection) => {
                debug!(%rejection, "Placement ignored");
                return Placement::Ignored(rejection);
            }
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.turn;
        self.board.set(position, Square::Occupied(mark));
        self.turn = mark.opponent();
        let status = self.status();

        #[cfg(debug_assertions)]
        {
            let post = PlaceContract::post(&before, self);
            debug_assert!(post.is_ok(), "Placement postcondition failed: {:?}", post);
        }

        match status {
            GameStatus::Won(winner) => info!(%winner, %position, "Game won"),
            GameStatus::Draw => info!(%position, "Game drawn"),
            GameStatus::InProgress => debug!(%mark, %position, "Mark placed"),
        }

        Placement::Placed {
            mark,
            position,
            status,
        }
    }

    /// Places the current mark at a named position.
    pub fn place_at(&mut self, position: Position) -> Placement {
        self.place(position.to_index())
    }

    /// Clears the board and gives the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(filled = self.board.filled(), "Resetting game");
        self.board = Board::new();
        self.turn = Player::X;
    }

    /// Alias for [`GameEngine::reset`].
    pub fn restart(&mut self) {
        self.reset();
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
