//! Named board positions.

use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board.
///
/// The discriminant is the row-major board index, so conversions to and
/// from `usize` are free.
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
    strum::FromRepr,
)]
#[repr(usize)]
pub enum Position {
    /// Index 0.
    #[strum(to_string = "Top-left")]
    TopLeft = 0,
    /// Index 1.
    #[strum(to_string = "Top-center")]
    TopCenter = 1,
    /// Index 2.
    #[strum(to_string = "Top-right")]
    TopRight = 2,
    /// Index 3.
    #[strum(to_string = "Middle-left")]
    MiddleLeft = 3,
    /// Index 4.
    #[strum(to_string = "Center")]
    Center = 4,
    /// Index 5.
    #[strum(to_string = "Middle-right")]
    MiddleRight = 5,
    /// Index 6.
    #[strum(to_string = "Bottom-left")]
    BottomLeft = 6,
    /// Index 7.
    #[strum(to_string = "Bottom-center")]
    BottomCenter = 7,
    /// Index 8.
    #[strum(to_string = "Bottom-right")]
    BottomRight = 8,
}

impl Position {
    /// Board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position for a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::from_repr(index)
    }

    /// Row, counting from the top.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Column, counting from the left.
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Position at `row`, `col`, if both are on the board.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Moves by the given offset, staying put when it would leave the board.
    pub fn step(self, rows: isize, cols: isize) -> Self {
        self.row()
            .checked_add_signed(rows)
            .zip(self.col().checked_add_signed(cols))
            .and_then(|(row, col)| Self::from_row_col(row, col))
            .unwrap_or(self)
    }
}
