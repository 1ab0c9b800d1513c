//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod app;
mod cli;
mod input;
mod terminal;
mod ui;

use anyhow::Result;
use app::App;
use clap::Parser;
use cli::{Cli, Command};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use terminal::TerminalGuard;
use tictactoe_engine::{EngineConfig, Mode, Player, Scoring};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            computer_mark,
            config,
            depth_sensitive,
            log_file,
        } => run_play(mode, computer_mark, config, depth_sensitive, log_file),
        Command::Analyze {
            board,
            mark,
            depth_sensitive,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(io::stderr)
                .init();
            analyze::report(&board, mark, scoring(depth_sensitive), &mut io::stdout().lock())
        }
    }
}

fn scoring(depth_sensitive: bool) -> Scoring {
    if depth_sensitive {
        Scoring::DepthSensitive
    } else {
        Scoring::Flat
    }
}

/// Run the interactive game
fn run_play(
    mode: Option<Mode>,
    computer_mark: Option<Player>,
    config_path: PathBuf,
    depth_sensitive: bool,
    log_file: PathBuf,
) -> Result<()> {
    init_file_tracing(&log_file)?;
    info!("Starting tictactoe");

    let config = load_config(&config_path, mode, computer_mark, depth_sensitive)?;
    let mut app = App::new(&config);

    // Restores the terminal on every exit path, including panics.
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Logs go to a file so they do not draw over the board.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[instrument(skip(path), fields(path = %path.display()))]
fn load_config(
    path: &Path,
    mode: Option<Mode>,
    computer_mark: Option<Player>,
    depth_sensitive: bool,
) -> Result<EngineConfig> {
    let mut config = EngineConfig::load_or_default(path)?;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(mark) = computer_mark {
        config = config.with_computer_mark(mark);
    }
    if depth_sensitive {
        config = config.with_scoring(Scoring::DepthSensitive);
    }
    info!(?config, "Configuration resolved");
    Ok(config)
}

/// Draw, wait for a key, apply it; repeat until the player quits.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(input) = input::translate(key)
        {
            app.apply(input);
        }
    }
    Ok(())
}
