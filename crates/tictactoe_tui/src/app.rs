//! Application state and logic.

use crate::input::{self, Input};
use tictactoe_engine::{Controller, EngineConfig, Position};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    game: Controller,
    cursor: Position,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            game: Controller::new(config),
            cursor: Position::Center,
            message: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Controller {
        &self.game
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last move or hint description, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one player request.
    #[instrument(skip(self))]
    pub fn apply(&mut self, input: Input) {
        match input {
            Input::Cursor(rows, cols) => self.cursor = input::move_cursor(self.cursor, rows, cols),
            Input::Place => self.place(self.cursor.index()),
            Input::PlaceAt(index) => self.place(index),
            Input::Restart => {
                self.game.reset();
                self.message = Some("Game restarted.".to_string());
            }
            Input::ToggleMode => {
                let mode = self.game.mode().toggle();
                self.game.set_mode(mode);
                self.message = Some(format!("Mode: {}", mode.label()));
            }
            Input::Hint => {
                self.message = self
                    .game
                    .hint()
                    .ok()
                    .and_then(Position::from_index)
                    .map(|pos| format!("Hint: {}", pos));
            }
            Input::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Plays `index`; rejected moves are ignored.
    fn place(&mut self, index: usize) {
        match self.game.play(index) {
            Ok(turn) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                let mut message = format!("{} played {}", turn.mark, describe(turn.placed));
                if let Some(reply) = turn.reply {
                    let answer = format!(", {} answered {}", turn.mark.opponent(), describe(reply));
                    message.push_str(&answer);
                }
                self.message = Some(message);
            }
            Err(err) => debug!(%err, index, "Ignoring move"),
        }
    }
}

fn describe(index: usize) -> String {
    Position::from_index(index).map_or_else(|| index.to_string(), |pos| pos.to_string())
}
