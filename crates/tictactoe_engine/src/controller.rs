//! Turn and mode handling for a single game session.

use crate::config::EngineConfig;
use crate::error::{InvalidMove, NoLegalMove};
use crate::search::Minimax;
use crate::{Board, GameStatus, Mode, Player};
use tracing::{debug, error, info, instrument};

/// What happened during one call to [`Controller::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Square the human played.
    pub placed: usize,
    /// Mark the human played.
    pub mark: Player,
    /// Square the computer answered with, if it moved.
    pub reply: Option<usize>,
    /// Status once both moves are on the board.
    pub status: GameStatus,
}

/// Owns the board, the side to move and the mode.
///
/// In [`Mode::VsComputer`] the computer's reply is searched and played
/// inside [`Controller::play`], so control only returns to the caller
/// when it is a human's turn or the game is over.
#[derive(Debug, Clone)]
pub struct Controller {
    board: Board,
    to_move: Player,
    mode: Mode,
    computer_mark: Player,
    engine: Minimax,
}

impl Controller {
    /// Starts a fresh game with the given settings.
    #[instrument]
    pub fn new(config: &EngineConfig) -> Self {
        let mut controller = Self {
            board: Board::new(),
            to_move: Player::X,
            mode: *config.mode(),
            computer_mark: *config.computer_mark(),
            engine: Minimax::new(*config.scoring()),
        };
        controller.reset();
        controller
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that plays next. After the game ends this is the last mover.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Mark played by the computer in [`Mode::VsComputer`].
    pub fn computer_mark(&self) -> Player {
        self.computer_mark
    }

    /// Derived game status.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Status line shown to the players.
    pub fn status_text(&self) -> String {
        match self.status() {
            GameStatus::InProgress => format!("It's {}'s turn", self.to_move),
            GameStatus::Won(winner) => format!("Player {} wins!", winner),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    /// Plays the side to move at `index`, then lets the computer answer
    /// if it is now the computer's turn.
    #[instrument(skip(self), fields(mark = %self.to_move, mode = %self.mode))]
    pub fn play(&mut self, index: usize) -> Result<Turn, InvalidMove> {
        let mark = self.to_move;
        self.board.place(index, mark).inspect_err(|err| {
            debug!(%err, "Move rejected");
        })?;
        info!(index, %mark, "Move accepted");

        let mut reply = None;
        if !self.status().is_over() {
            self.to_move = mark.opponent();
            if self.computer_to_move() {
                reply = self.computer_move();
            }
        }

        let status = self.status();
        if status.is_over() {
            info!(?status, "Game over");
        }
        Ok(Turn {
            placed: index,
            mark,
            reply,
            status,
        })
    }

    /// Best square for the side to move, as the engine sees it.
    #[instrument(skip(self))]
    pub fn hint(&self) -> Result<usize, NoLegalMove> {
        self.engine.best_move(&self.board, self.to_move)
    }

    /// Empties the board and gives X the move. If the computer plays X it
    /// opens immediately.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.to_move = Player::X;
        info!(mode = %self.mode, "Game reset");
        if self.computer_to_move() {
            self.computer_move();
        }
    }

    /// Switches mode; the board starts over.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.reset();
    }

    fn computer_to_move(&self) -> bool {
        self.mode == Mode::VsComputer
            && self.to_move == self.computer_mark
            && !self.status().is_over()
    }

    /// Searches and plays the computer's move.
    fn computer_move(&mut self) -> Option<usize> {
        let mark = self.computer_mark;
        let index = match self.engine.best_move(&self.board, mark) {
            Ok(index) => index,
            Err(err) => {
                debug_assert!(false, "computer asked to move on a finished game: {err}");
                error!(%err, "Computer could not move");
                return None;
            }
        };
        if let Err(err) = self.board.place(index, mark) {
            debug_assert!(false, "search chose an unplayable square: {err}");
            error!(%err, index, "Computer move rejected");
            return None;
        }

        info!(index, %mark, "Computer moved");
        if !self.status().is_over() {
            self.to_move = mark.opponent();
        }
        Some(index)
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}
