//! Exhaustive minimax search.
//!
//! Every continuation is explored; there is no pruning, no depth limit and
//! no transposition table. Scoring all nine replies to an empty board visits
//! 549,945 positions.

use crate::error::NoLegalMove;
use crate::rules;
use crate::{Board, GameStatus, Player, Square};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How terminal positions are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scoring {
    /// Win +1, loss -1, draw 0 regardless of how far away the result is.
    /// Among equally scored moves the lowest index is chosen, so a slow
    /// win may be preferred over a fast one.
    #[default]
    Flat,
    /// Win `10 - depth`, loss `depth - 10`, draw 0. Prefers the quickest
    /// win and the slowest loss. Picks different moves than [`Scoring::Flat`]
    /// in some positions.
    DepthSensitive,
}

impl Scoring {
    fn win(self, depth: i32) -> i32 {
        match self {
            Scoring::Flat => 1,
            Scoring::DepthSensitive => 10 - depth,
        }
    }
}

/// Minimax value of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct MoveScore {
    /// Board index of the move.
    pub index: usize,
    /// Value for the searching player.
    pub score: i32,
}

/// Counters from one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Positions evaluated, including the terminal ones.
    pub nodes: u64,
}

/// Scores of every legal move plus search counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// One entry per empty square, in index order.
    pub scores: Vec<MoveScore>,
    /// Counters for the whole search.
    pub stats: SearchStats,
}

impl Analysis {
    /// Highest-scoring move. Ties go to the lowest index.
    pub fn best(&self) -> Option<MoveScore> {
        self.scores
            .iter()
            .fold(None::<MoveScore>, |best, &candidate| match best {
                Some(best) if candidate.score <= best.score => Some(best),
                _ => Some(candidate),
            })
    }
}

/// Minimax move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, new)]
pub struct Minimax {
    scoring: Scoring,
}

impl Minimax {
    /// Best square for `mark` to play.
    ///
    /// Candidates are tried in ascending index order and the first one
    /// reaching a new maximum is kept, so ties go to the lowest index.
    #[instrument(skip(self, board), fields(scoring = ?self.scoring))]
    pub fn best_move(&self, board: &Board, mark: Player) -> Result<usize, NoLegalMove> {
        let best = self.analyze(board, mark)?.best().ok_or(NoLegalMove)?;
        debug!(index = best.index, score = best.score, "Best move selected");
        Ok(best.index)
    }

    /// Minimax value of every legal move for `mark`, in index order.
    pub fn score_moves(&self, board: &Board, mark: Player) -> Result<Vec<MoveScore>, NoLegalMove> {
        self.analyze(board, mark).map(|analysis| analysis.scores)
    }

    /// Scores every legal move for `mark` and reports how much was searched.
    ///
    /// The caller's board is copied; marks placed during the search are
    /// all taken back before this returns.
    #[instrument(skip(self, board), fields(scoring = ?self.scoring))]
    pub fn analyze(&self, board: &Board, mark: Player) -> Result<Analysis, NoLegalMove> {
        if board.status().is_over() {
            return Err(NoLegalMove);
        }

        let mut scratch = board.clone();
        let mut search = Search {
            maximizer: mark,
            scoring: self.scoring,
            stats: SearchStats::default(),
        };
        let mut scores = Vec::with_capacity(scratch.empty_cells().count());
        for index in 0..crate::CELLS {
            if !scratch.is_empty(index) {
                continue;
            }
            scratch.set(index, Square::Occupied(mark));
            let score = search.minimax(&mut scratch, 1, false);
            scratch.set(index, Square::Empty);
            scores.push(MoveScore::new(index, score));
        }
        debug_assert_eq!(&scratch, board, "search left marks on the board");

        debug!(nodes = search.stats.nodes, candidates = scores.len(), "Search complete");
        Ok(Analysis {
            scores,
            stats: search.stats,
        })
    }
}

struct Search {
    maximizer: Player,
    scoring: Scoring,
    stats: SearchStats,
}

impl Search {
    /// Value of `board` for the maximizer; `maximizing` says whose turn it is.
    fn minimax(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;

        match rules::evaluate(board) {
            GameStatus::Won(winner) if winner == self.maximizer => {
                return self.scoring.win(depth);
            }
            GameStatus::Won(_) => return -self.scoring.win(depth),
            GameStatus::Draw => return 0,
            GameStatus::InProgress => {}
        }

        let mover = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in 0..crate::CELLS {
            if !board.is_empty(index) {
                continue;
            }
            board.set(index, Square::Occupied(mover));
            let score = self.minimax(board, depth + 1, !maximizing);
            board.set(index, Square::Empty);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_ties_go_to_lowest_index() {
        // Both 2 and 5 force a win for O; flat scoring cannot tell them apart.
        let board: Board = "XX.OO....".parse().unwrap();
        assert_eq!(Minimax::default().best_move(&board, Player::O), Ok(2));
        assert_eq!(
            Minimax::new(Scoring::DepthSensitive).best_move(&board, Player::O),
            Ok(5)
        );
    }

    #[test]
    fn test_best_keeps_first_of_equal_scores() {
        let analysis = Analysis {
            scores: vec![MoveScore::new(1, -1), MoveScore::new(3, 1), MoveScore::new(7, 1)],
            stats: SearchStats::default(),
        };
        assert_eq!(analysis.best(), Some(MoveScore::new(3, 1)));

        let empty = Analysis {
            scores: Vec::new(),
            stats: SearchStats::default(),
        };
        assert_eq!(empty.best(), None);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // O must stop X on the top row
        let board: Board = "XX..O....".parse().unwrap();
        assert_eq!(Minimax::default().best_move(&board, Player::O), Ok(2));
    }

    #[test]
    fn test_terminal_boards_have_no_move() {
        let won: Board = "XXXOO....".parse().unwrap();
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(Minimax::default().best_move(&won, Player::O), Err(NoLegalMove));
        assert_eq!(Minimax::default().best_move(&drawn, Player::O), Err(NoLegalMove));
    }

    #[test]
    fn test_empty_board_node_count() {
        let analysis = Minimax::default().analyze(&Board::new(), Player::X).unwrap();
        assert_eq!(analysis.stats.nodes, 549_945);
        assert!(analysis.scores.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_depth_sensitive_prefers_faster_win() {
        // X wins at once on 1; 0 also wins, two plies later.
        let board: Board = "...OX.OX.".parse().unwrap();
        let flat = Minimax::new(Scoring::Flat);
        let deep = Minimax::new(Scoring::DepthSensitive);

        assert_eq!(flat.best_move(&board, Player::X), Ok(0));
        assert_eq!(deep.best_move(&board, Player::X), Ok(1));

        let scores = deep.score_moves(&board, Player::X).unwrap();
        assert_eq!(
            scores,
            vec![
                MoveScore::new(0, 7),
                MoveScore::new(1, 9),
                MoveScore::new(2, -8),
                MoveScore::new(5, -8),
                MoveScore::new(8, -8),
            ]
        );
    }
}
