//! Move selection on top of the evaluators.

use rayon::prelude::*;
use tracing::debug;
use ttt_core::{Board, Player, Pos};

use crate::config::{Method, SearchConfig};
use crate::error::{Result, SearchError};
use crate::recursive::recursive_value;
use crate::solver::Solver;
use crate::stats::SearchStats;

/// One legal move and its minimax value for the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveEval {
    pub pos: Pos,
    pub board: Board,
    pub value: i8,
}

/// Picks the best next board for the player to move.
pub struct MoveSelector {
    config: SearchConfig,
    /// Accumulated iterative-search statistics
    pub stats: SearchStats,
}

impl MoveSelector {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    /// Evaluate every legal move, in ascending cell order.
    ///
    /// Values are from the point of view of `board.whose_turn()`.
    pub fn evaluate_moves(&mut self, board: &Board) -> Result<Vec<MoveEval>> {
        let mover = board.whose_turn();
        let mut evals = Vec::new();
        for (pos, child) in board.legal_positions().into_iter().zip(board.possible()) {
            let (value, stats) = score_child(self.config, &child, mover)?;
            self.stats.merge(&stats);
            evals.push(MoveEval {
                pos,
                board: child,
                value,
            });
        }
        Ok(evals)
    }

    /// Best next board for the player to move.
    ///
    /// Ties go to the last maximal move in ascending cell order.
    pub fn best_move(&mut self, board: &Board) -> Result<Board> {
        let evals = self.evaluate_moves(board)?;
        pick(board, &evals)
    }

    /// Same as [`best_move`](Self::best_move), with each child scored on the
    /// rayon pool. Every task owns its own evaluator.
    pub fn best_move_parallel(&mut self, board: &Board) -> Result<Board> {
        let mover = board.whose_turn();
        let config = self.config;
        let children: Vec<(Pos, Board)> = board
            .legal_positions()
            .into_iter()
            .zip(board.possible())
            .collect();

        let scored: Vec<(MoveEval, SearchStats)> = children
            .par_iter()
            .map(|&(pos, child)| -> Result<(MoveEval, SearchStats)> {
                let (value, stats) = score_child(config, &child, mover)?;
                Ok((
                    MoveEval {
                        pos,
                        board: child,
                        value,
                    },
                    stats,
                ))
            })
            .collect::<Result<_>>()?;

        let mut evals = Vec::with_capacity(scored.len());
        for (eval, stats) in scored {
            self.stats.merge(&stats);
            evals.push(eval);
        }
        pick(board, &evals)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}

fn score_child(config: SearchConfig, child: &Board, mover: Player) -> Result<(i8, SearchStats)> {
    match config.method {
        Method::Iterative => {
            let mut solver = Solver::with_config(config);
            let value = solver.value(child, mover)?;
            Ok((value, solver.stats))
        }
        Method::Recursive => Ok((recursive_value(child, mover)?, SearchStats::default())),
    }
}

fn pick(board: &Board, evals: &[MoveEval]) -> Result<Board> {
    // max_by_key keeps the last of equal maxima.
    let best = evals
        .iter()
        .max_by_key(|eval| eval.value)
        .ok_or(SearchError::NoMoves { board: *board })?;
    debug!(pos = best.pos.0, value = best.value, candidates = evals.len(), "move selected");
    Ok(best.board)
}
