//! Win detection logic for tic-tac-toe.

use crate::{Board, Player};

/// The eight index triples that win when held by one player.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first complete
/// line decides. Returns `None` if no line is held by a single player.
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let player = squares[a].player()?;
        (squares[b] == squares[a] && squares[c] == squares[a]).then_some(player)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for player in [Player::X, Player::O] {
            for line in WINNING_LINES {
                let mut board = Board::new();
                for index in line {
                    board.place(index, player).unwrap();
                }
                assert_eq!(check_winner(&board), Some(player), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XXO......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O.X.OX..O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX.......".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
