//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_engine::Position;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor by rows and columns.
    Cursor(isize, isize),
    /// Play the square under the cursor.
    Place,
    /// Play a square directly (0-8).
    PlaceAt(usize),
    /// Start the game over.
    Restart,
    /// Switch between two-player and versus-computer.
    ToggleMode,
    /// Ask the engine for a suggestion.
    Hint,
    /// Leave the program.
    Quit,
}

/// Maps a key press to an [`Input`], if it is bound.
///
/// Digits follow the on-screen numbering, so `1` is the top-left square.
pub fn translate(key: KeyEvent) -> Option<Input> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }
    match key.code {
        KeyCode::Up => Some(Input::Cursor(-1, 0)),
        KeyCode::Down => Some(Input::Cursor(1, 0)),
        KeyCode::Left => Some(Input::Cursor(0, -1)),
        KeyCode::Right => Some(Input::Cursor(0, 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::Place),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Input::PlaceAt(d as usize - 1)),
        KeyCode::Char('r') => Some(Input::Restart),
        KeyCode::Char('m') => Some(Input::ToggleMode),
        KeyCode::Char('h') => Some(Input::Hint),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Moves the cursor, staying on the board.
pub fn move_cursor(cursor: Position, rows: isize, cols: isize) -> Position {
    cursor.step(rows, cols)
}
