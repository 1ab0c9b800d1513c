//! Tests for board placement and status.

use std::collections::HashSet;
use tictactoe_engine::{
    Board, BoardParseError, GameStatus, InvalidMove, Player, Square, rules::WINNING_LINES,
};

/// Every board reachable from an empty one with X moving first.
fn reachable_boards() -> HashSet<Board> {
    fn walk(board: &Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board.clone()) {
            return;
        }
        let empty: Vec<usize> = board.empty_cells().collect();
        for index in empty {
            let mut next = board.clone();
            if next.place(index, to_move).is_ok() {
                walk(&next, to_move.opponent(), seen);
            }
        }
    }

    let mut seen = HashSet::new();
    walk(&Board::new(), Player::X, &mut seen);
    seen
}

#[test]
fn test_place_then_in_progress() {
    let mut board = Board::new();
    board.place(0, Player::X).unwrap();
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let marks = [
        Player::X,
        Player::O,
        Player::X,
        Player::X,
        Player::O,
        Player::O,
        Player::O,
        Player::X,
        Player::X,
    ];
    let board = Board::from_squares(marks.map(Square::Occupied));
    assert!(board.is_full());
    assert_eq!(board.status(), GameStatus::Draw);
}

#[test]
fn test_occupied_square_is_rejected() {
    let mut board = Board::new();
    board.place(4, Player::X).unwrap();
    board.place(0, Player::O).unwrap();

    let before = board.clone();
    assert_eq!(board.place(0, Player::X), Err(InvalidMove::Occupied { index: 0 }));
    assert_eq!(board, before);
    assert_eq!(board.get(0), Some(Square::Occupied(Player::O)));
}

#[test]
fn test_out_of_range_is_rejected() {
    let mut board = Board::new();
    assert_eq!(board.place(9, Player::X), Err(InvalidMove::OutOfRange { index: 9 }));
    assert_eq!(board, Board::new());
}

#[test]
fn test_no_moves_after_game_over() {
    let mut board: Board = "XXXOO....".parse().unwrap();
    let before = board.clone();
    assert_eq!(board.place(5, Player::O), Err(InvalidMove::GameOver));
    assert_eq!(board, before);
}

#[test]
fn test_reset_clears_everything() {
    let mut board: Board = "XOXXOOOXX".parse().unwrap();
    board.reset();
    assert_eq!(board.status(), GameStatus::InProgress);
    assert!(board.squares().iter().all(|&s| s == Square::Empty));
    assert_eq!(board.empty_cells().count(), 9);
}

#[test]
fn test_status_matches_line_definition_on_all_reachable_boards() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);

    for board in boards {
        let squares = board.squares();
        let won_by = |player: Player| {
            WINNING_LINES
                .iter()
                .any(|line| line.iter().all(|&i| squares[i] == Square::Occupied(player)))
        };
        let expected = if won_by(Player::X) {
            GameStatus::Won(Player::X)
        } else if won_by(Player::O) {
            GameStatus::Won(Player::O)
        } else if squares.iter().all(|&s| s != Square::Empty) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        assert_eq!(board.status(), expected, "\n{board}");
    }
}

#[test]
fn test_notation_round_trip_and_errors() {
    let board: Board = "x-o_ .XO.".parse().unwrap();
    assert_eq!(board.count(Player::X), 2);
    assert_eq!(board.count(Player::O), 2);
    assert_eq!(board.to_string(), "X|2|O\n-+-+-\n4|5|6\n-+-+-\nX|O|9");

    assert_eq!(
        "XO".parse::<Board>(),
        Err(BoardParseError::WrongLength { found: 2 })
    );
    assert_eq!(
        "XO?......".parse::<Board>(),
        Err(BoardParseError::BadCell { index: 2, found: '?' })
    );
}
