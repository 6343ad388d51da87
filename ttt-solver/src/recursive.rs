//! Plain recursive minimax.
//!
//! Kept as the reference the iterative [`Solver`](crate::Solver) is checked
//! against. Recursion depth is bounded by the number of empty cells.

use ttt_core::{terminal_value, Board, Player};

use crate::error::{Result, SearchError};

/// Minimax value of `board` for `perspective`: 1 win, 0 draw, -1 loss.
///
/// Maximizes over children when `perspective` is to move, minimizes
/// otherwise. Every child is explored.
pub fn recursive_value(board: &Board, perspective: Player) -> Result<i8> {
    if let Some(value) = terminal_value(board, perspective) {
        return Ok(value);
    }

    let children = board.possible();
    // Unreachable while terminal_value reports full boards as draws.
    if children.is_empty() {
        return Err(SearchError::NoLegalMoves { board: *board });
    }

    let maximizing = board.whose_turn() == perspective;
    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    for child in &children {
        let value = recursive_value(child, perspective)?;
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    Ok(best)
}
