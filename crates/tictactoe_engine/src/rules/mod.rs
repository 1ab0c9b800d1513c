//! Terminal-state evaluation.
//!
//! Pure functions over a [`Board`](crate::Board), shared by the board's
//! own status query and by the search.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, check_winner};

use crate::{Board, GameStatus};

/// Derives the status of `board`: a win takes precedence over a full board.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_win_on_full_board_is_not_a_draw() {
        // X takes the top row with the last empty square
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }
}
