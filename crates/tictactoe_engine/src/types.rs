//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, InvalidMove};
use crate::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    clap::ValueEnum,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so index `row * 3 + col`
/// addresses a cell. The board does not track whose turn it is; turn
/// order belongs to [`Controller`](crate::Controller).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from its squares.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(|&index| self.is_empty(index))
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&square| square == Square::Occupied(player))
            .count()
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the game status from the squares.
    pub fn status(&self) -> GameStatus {
        rules::evaluate(self)
    }

    /// Places `mark` at `index`.
    ///
    /// Fails without touching the board if the index is off the board,
    /// the square is taken, or the game has already been decided.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Player) -> Result<(), InvalidMove> {
        if index >= CELLS {
            return Err(InvalidMove::OutOfRange { index });
        }
        if self.status().is_over() {
            return Err(InvalidMove::GameOver);
        }
        if !self.is_empty(index) {
            return Err(InvalidMove::Occupied { index });
        }
        self.squares[index] = Square::Occupied(mark);
        debug!(index, %mark, "Mark placed");
        Ok(())
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// Unchecked write used by the search to play and take back moves.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses the compact nine-character notation, e.g. `"XX.OO...."`.
///
/// `X` and `O` (any case) are marks; `.`, `-`, `_` and space are empty.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != CELLS {
            return Err(BoardParseError::WrongLength { found: cells.len() });
        }
        let mut board = Board::new();
        for (index, &c) in cells.iter().enumerate() {
            board.squares[index] = match c {
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                found => return Err(BoardParseError::BadCell { index, found }),
            };
        }
        Ok(board)
    }
}

/// Current status of the game, always derived from a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Who plays against whom.
///
/// The string forms `twoPlayer` and `ai` are the mode selector values;
/// `two-player` and `vs-computer` are accepted too and are what the
/// command line and config file use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    #[strum(to_string = "twoPlayer", serialize = "two-player")]
    TwoPlayer,
    /// A human plays the minimax engine.
    #[strum(to_string = "ai", serialize = "vs-computer")]
    VsComputer,
}

impl Mode {
    /// Returns the display label for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "Two players",
            Mode::VsComputer => "Versus computer",
        }
    }

    /// Switches to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::TwoPlayer => Mode::VsComputer,
            Mode::VsComputer => Mode::TwoPlayer,
        }
    }
}
