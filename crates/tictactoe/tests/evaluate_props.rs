//! Property tests for status evaluation and placement.

use proptest::prelude::*;
use tictactoe::rules::LINES;
use tictactoe::{
    Board, GameEngine, GameStatus, InvariantSet, Placement, Player, Square, TicTacToeInvariants,
    evaluate,
};

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn has_line(squares: &[Square; 9], player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
}

/// Every full board on which neither player holds a line.
///
/// Only a few dozen of the 512 full boards qualify, too few to reach by
/// rejection sampling.
fn line_free_full_boards() -> Vec<[Square; 9]> {
    (0u16..512)
        .map(|bits| {
            let squares: [Square; 9] = std::array::from_fn(|i| {
                if bits & (1 << i) != 0 {
                    Square::Occupied(Player::X)
                } else {
                    Square::Occupied(Player::O)
                }
            });
            squares
        })
        .filter(|squares| !has_line(squares, Player::X) && !has_line(squares, Player::O))
        .collect()
}

proptest! {
    /// A completed line of one mark always wins for that mark.
    #[test]
    fn prop_completed_line_wins(
        mut squares in prop::array::uniform9(square()),
        line in 0..LINES.len(),
        mark in player(),
    ) {
        for &i in &LINES[line] {
            squares[i] = Square::Occupied(mark);
        }
        prop_assume!(!has_line(&squares, mark.opponent()));

        prop_assert_eq!(evaluate(&Board::from_squares(squares)), GameStatus::Won(mark));
    }

    /// A full board without a line is a draw.
    #[test]
    fn prop_full_board_without_line_is_draw(squares in prop::sample::select(line_free_full_boards())) {
        prop_assert_eq!(evaluate(&Board::from_squares(squares)), GameStatus::Draw);
    }

    /// A board with an empty square and no line is still in progress.
    #[test]
    fn prop_open_board_without_line_in_progress(
        mut squares in prop::array::uniform9(square()),
        hole in 0usize..9,
    ) {
        squares[hole] = Square::Empty;
        prop_assume!(!has_line(&squares, Player::X) && !has_line(&squares, Player::O));

        prop_assert_eq!(evaluate(&Board::from_squares(squares)), GameStatus::InProgress);
    }

    /// Arbitrary input sequences keep every invariant, and ignored
    /// placements change nothing.
    #[test]
    fn prop_random_play_keeps_invariants(indices in prop::collection::vec(0usize..12, 0..30)) {
        let mut game = GameEngine::new();
        for index in indices {
            let before = game.clone();
            match game.place(index) {
                Placement::Placed { mark, .. } => {
                    prop_assert_eq!(mark, before.turn());
                    prop_assert_eq!(game.turn(), mark.opponent());
                    prop_assert_eq!(game.board().filled(), before.board().filled() + 1);
                }
                Placement::Ignored(_) => {
                    prop_assert_eq!(&game, &before);
                }
            }
            prop_assert!(TicTacToeInvariants::check_all(&game).is_ok());
        }
    }
}
