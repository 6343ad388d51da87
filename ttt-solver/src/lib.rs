//! Exhaustive tic-tac-toe minimax.
//!
//! Two evaluators compute the same contract: the value of a board for a
//! perspective player, `1` (win), `0` (draw) or `-1` (loss), assuming both
//! sides play perfectly. No pruning or caching; every reachable position is
//! examined.
//!
//! - [`recursive_value`]: plain recursive minimax, the reference.
//! - [`Solver`]: the same search over an explicit stack of frames.
//! - [`MoveSelector`]: scores each legal move and picks the best board.
//!
//! ```
//! use ttt_core::{Board, Player, Pos};
//!
//! let board: Board = "xo.xo....".parse().unwrap();
//! assert_eq!(ttt_solver::evaluate(&board, Player::X), 1);
//!
//! let next = ttt_solver::best_move(&board).unwrap();
//! assert_eq!(board.diff(&next), Some(Pos(6)));
//! ```

pub mod config;
pub mod error;
pub mod recursive;
pub mod selector;
pub mod solver;
pub mod stats;

pub use config::{Method, SearchConfig};
pub use error::{Result, SearchError};
pub use recursive::recursive_value;
pub use selector::{MoveEval, MoveSelector};
pub use solver::Solver;
pub use stats::SearchStats;

use ttt_core::{Board, Player};

/// Minimax value of `board` for `perspective`, using the iterative evaluator.
///
/// # Panics
///
/// Panics if an undecided board has no legal moves, which means terminal
/// detection is broken.
pub fn evaluate(board: &Board, perspective: Player) -> i8 {
    match Solver::new().value(board, perspective) {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

/// Best next board for the player to move. Ties go to the last maximal move
/// in ascending cell order.
pub fn best_move(board: &Board) -> Result<Board> {
    MoveSelector::new().best_move(board)
}
