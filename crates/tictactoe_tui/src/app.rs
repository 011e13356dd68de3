//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::{Action, move_cursor};
use tictactoe::{GameEngine, Placement, Position, Rejection, StatusMessage};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameEngine,
    cursor: Position,
    last_rejection: Option<Rejection>,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            game: GameEngine::new(),
            cursor: Position::Center,
            last_rejection: None,
            show_hints: *config.show_hints(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Reason the most recent selection was ignored, cleared by the next action.
    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    /// Whether the key hint line is drawn.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line text: whose turn it is, who won, or a draw.
    pub fn status_line(&self) -> String {
        StatusMessage::new(self.game.status(), self.game.turn()).to_string()
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        self.last_rejection = None;
        match action {
            Action::Place(index) => self.select(index),
            Action::PlaceCursor => self.select(self.cursor.to_index()),
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Places the current mark at `index` and moves the cursor there.
    pub fn select(&mut self, index: usize) {
        match self.game.place(index) {
            Placement::Placed { position, .. } => self.cursor = position,
            Placement::Ignored(rejection) => {
                debug!(%rejection, "Selection ignored");
                self.last_rejection = Some(rejection);
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = Position::Center;
        self.last_rejection = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use tictactoe::{GameStatus, Player};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_new_app() {
        let app = app();
        assert_eq!(app.status_line(), "Turn: X");
        assert_eq!(app.cursor(), Position::Center);
        assert!(app.show_hints());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_place_by_cursor() {
        let mut app = app();
        app.handle(Action::MoveCursor(Direction::Up));
        app.handle(Action::PlaceCursor);
        assert_eq!(
            app.game().board().at(Position::TopCenter),
            tictactoe::Square::Occupied(Player::X)
        );
        assert_eq!(app.status_line(), "Turn: O");
    }

    #[test]
    fn test_rejection_is_remembered_until_next_action() {
        let mut app = app();
        app.handle(Action::Place(4));
        app.handle(Action::Place(4));
        assert_eq!(app.last_rejection(), Some(Rejection::Occupied(Position::Center)));
        app.handle(Action::MoveCursor(Direction::Left));
        assert_eq!(app.last_rejection(), None);
    }

    #[test]
    fn test_win_then_restart() {
        let mut app = app();
        for index in [0, 4, 1, 5, 2] {
            app.handle(Action::Place(index));
        }
        assert_eq!(app.game().status(), GameStatus::Won(Player::X));
        assert_eq!(app.status_line(), "X wins!");

        app.handle(Action::Restart);
        assert_eq!(app.game().status(), GameStatus::InProgress);
        assert_eq!(app.status_line(), "Turn: X");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
