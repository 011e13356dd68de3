//! Status line text for renderers.

use super::{GameStatus, Player};

/// Human-readable status for a game in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StatusMessage {
    /// Waiting for `Player` to move.
    #[display("Turn: {}", _0)]
    Turn(Player),
    /// `Player` completed a line.
    #[display("{} wins!", _0)]
    Winner(Player),
    /// Board full, nobody won.
    #[display("It's a draw!")]
    Draw,
}

impl StatusMessage {
    /// Builds the message from the derived status and the mark to move.
    pub fn new(status: GameStatus, turn: Player) -> Self {
        match status {
            GameStatus::InProgress => StatusMessage::Turn(turn),
            GameStatus::Won(player) => StatusMessage::Winner(player),
            GameStatus::Draw => StatusMessage::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StatusMessage::new(GameStatus::InProgress, Player::O).to_string(),
            "Turn: O"
        );
        assert_eq!(
            StatusMessage::new(GameStatus::Won(Player::X), Player::O).to_string(),
            "X wins!"
        );
        assert_eq!(
            StatusMessage::new(GameStatus::Draw, Player::O).to_string(),
            "It's a draw!"
        );
    }
}
