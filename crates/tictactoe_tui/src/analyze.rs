//! One-shot position analysis for the `analyze` command.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_engine::{Board, Minimax, Player, Position, Scoring};
use tracing::instrument;

/// Side to move on a board where X started.
pub fn side_to_move(board: &Board) -> Player {
    if board.count(Player::X) > board.count(Player::O) {
        Player::O
    } else {
        Player::X
    }
}

/// Writes the board, its status, every move's score and the chosen move.
#[instrument(skip(board, out))]
pub fn report(
    board: &Board,
    mark: Option<Player>,
    scoring: Scoring,
    out: &mut impl Write,
) -> Result<()> {
    let mark = mark.unwrap_or_else(|| side_to_move(board));
    writeln!(out, "{board}\n")?;
    writeln!(out, "Status: {:?}", board.status())?;

    let analysis = Minimax::new(scoring)
        .analyze(board, mark)
        .with_context(|| format!("cannot analyze {mark} to move"))?;

    writeln!(out, "Scores for {mark} ({scoring:?}):")?;
    for score in &analysis.scores {
        let label = Position::from_index(score.index)
            .map(|p| p.to_string())
            .unwrap_or_default();
        writeln!(out, "  {} {:<13} {:>3}", score.index, label, score.score)?;
    }
    if let Some(best) = analysis.best() {
        writeln!(out, "Best move: {}", best.index)?;
    }
    writeln!(out, "Positions searched: {}", analysis.stats.nodes)?;
    Ok(())
}
