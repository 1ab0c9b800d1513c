//! Tic-tac-toe rules and a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board**: nine squares, placement validation, derived status
//! - **Rules**: winning lines, win and draw detection
//! - **Search**: exhaustive minimax choosing the computer's square
//! - **Controller**: turn order, mode, and the computer's synchronous reply
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Controller, EngineConfig, GameStatus, Mode};
//!
//! let config = EngineConfig::default().with_mode(Mode::VsComputer);
//! let mut game = Controller::new(&config);
//!
//! let turn = game.play(4).unwrap();
//! assert!(turn.reply.is_some());
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.status_text(), "It's X's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod error;
mod position;
pub mod rules;
mod search;
mod types;

// Crate-level exports - Board and marks
pub use types::{Board, CELLS, GameStatus, Mode, Player, Square};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Search
pub use search::{Analysis, Minimax, MoveScore, Scoring, SearchStats};

// Crate-level exports - Session control
pub use controller::{Controller, Turn};

// Crate-level exports - Configuration
pub use config::EngineConfig;

// Crate-level exports - Errors
pub use error::{BoardParseError, ConfigError, InvalidMove, NoLegalMove};
