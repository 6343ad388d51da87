//! Search error types.

use thiserror::Error;
use ttt_core::Board;

/// Errors raised while evaluating positions or selecting moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchError {
    /// A board with no winner and empty cells produced no children.
    /// This is a defect in terminal detection, never a caller error.
    #[error("search invariant violated: non-terminal board {board:?} has no legal moves")]
    NoLegalMoves { board: Board },

    #[error("node budget of {budget} exhausted before the search finished")]
    BudgetExhausted { budget: u64 },

    #[error("no moves available on {board:?}")]
    NoMoves { board: Board },
}

/// Convenience result alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
