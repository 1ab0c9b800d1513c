//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Board, Mode, Player};

/// Tic-tac-toe against a friend or a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Opponent selection (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// Mark the computer plays (overrides the config file)
        #[arg(long, value_enum)]
        computer_mark: Option<Player>,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Prefer quick wins and slow losses
        #[arg(long)]
        depth_sensitive: bool,

        /// Where to write logs while the terminal is in use
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Score every move in a position
    Analyze {
        /// Nine cells, row by row: X, O, or . for empty (e.g. "XX.OO....")
        board: Board,

        /// Mark to move (defaults to whoever's turn it is)
        #[arg(long, value_enum)]
        mark: Option<Player>,

        /// Prefer quick wins and slow losses
        #[arg(long)]
        depth_sensitive: bool,
    },
}
