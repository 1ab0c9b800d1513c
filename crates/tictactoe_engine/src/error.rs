//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// A rejected placement. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// The index is not in 0-8.
    #[display("Position {index} is off the board (must be 0-8)")]
    OutOfRange {
        /// Requested index.
        index: usize,
    },

    /// The square already holds a mark.
    #[display("Square {index} is already occupied")]
    Occupied {
        /// Requested index.
        index: usize,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Search was asked for a move on a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal move: the game is already decided")]
pub struct NoLegalMove;

/// Failure to parse the nine-character board notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Notation must be exactly nine characters.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of characters supplied.
        found: usize,
    },

    /// A character other than a mark or an empty marker.
    #[display("Unexpected {found:?} at cell {index}")]
    BadCell {
        /// Cell index of the bad character.
        index: usize,
        /// The character found.
        found: char,
    },
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

