//! Iterative minimax over an explicit frame stack.
//!
//! Produces exactly the values of [`recursive_value`](crate::recursive_value)
//! without native recursion. `frames[d]` holds the siblings at depth `d`
//! (depth 0 holds only the root board) and a cursor to the one being
//! examined. Each step looks at the board under the top cursor:
//!
//! ```text
//! undecided  -> push a frame of its children (descend)
//! decided v  -> record v at the cursor, then
//!                 siblings left      -> advance the cursor
//!                 depth 0            -> v is the answer
//!                 frame exhausted    -> combine (max/min), pop, record the
//!                                       combined value in the parent, and
//!                                       repeat this check one level up
//! ```

use tracing::{debug, trace, warn};
use ttt_core::{terminal_value, Board, Player, CELLS};

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::stats::SearchStats;

/// Stack frame for iterative minimax.
struct Frame {
    /// Boards at this depth, ascending cell index of the move that made them
    siblings: Vec<Board>,
    /// Index into siblings
    cursor: usize,
    /// Resolved values, one per sibling up to and including the cursor
    scores: Vec<i8>,
    /// Whether the board that spawned this frame had the perspective player to move
    is_maximizing: bool,
}

impl Frame {
    fn root(board: Board) -> Frame {
        Frame::new(vec![board], true)
    }

    fn new(siblings: Vec<Board>, is_maximizing: bool) -> Frame {
        let width = siblings.len();
        Frame {
            siblings,
            cursor: 0,
            scores: Vec::with_capacity(width),
            is_maximizing,
        }
    }

    /// Board under the cursor.
    #[inline]
    fn current(&self) -> Board {
        self.siblings[self.cursor]
    }

    /// Resolve the sibling under the cursor.
    #[inline]
    fn resolve(&mut self, value: i8) {
        debug_assert_eq!(self.scores.len(), self.cursor);
        self.scores.push(value);
    }

    /// Move to the next sibling. Returns false once all are resolved.
    #[inline]
    fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.siblings.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Value this frame hands back to its parent.
    fn combine(&self) -> i8 {
        let scores = self.scores.iter().copied();
        if self.is_maximizing {
            scores.fold(i8::MIN, i8::max)
        } else {
            scores.fold(i8::MAX, i8::min)
        }
    }
}

/// Exhaustive iterative minimax evaluator.
///
/// A `Solver` may be reused; statistics accumulate across calls, while every
/// call builds its own frame stack.
pub struct Solver {
    config: SearchConfig,
    /// Solver statistics
    pub stats: SearchStats,
}

impl Solver {
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    /// Minimax value of `board` for `perspective`: 1 win, 0 draw, -1 loss.
    ///
    /// Fails with [`SearchError::BudgetExhausted`] if a node budget is set and
    /// exceeded, and with [`SearchError::NoLegalMoves`] if an undecided board
    /// has no children.
    pub fn value(&mut self, board: &Board, perspective: Player) -> Result<i8> {
        let mut frames: Vec<Frame> = Vec::with_capacity(CELLS + 1);
        frames.push(Frame::root(*board));
        let mut visited: u64 = 0;

        loop {
            let depth = frames.len() - 1;
            let current = frames[depth].current();

            visited += 1;
            self.stats.nodes_visited += 1;
            if let Some(budget) = self.config.node_budget {
                if visited > budget {
                    warn!(budget, depth, root = ?board, "node budget exhausted");
                    return Err(SearchError::BudgetExhausted { budget });
                }
            }

            let Some(mut value) = terminal_value(&current, perspective) else {
                let children = current.possible();
                // Unreachable while terminal_value reports full boards as draws.
                if children.is_empty() {
                    return Err(SearchError::NoLegalMoves { board: current });
                }
                let is_maximizing = current.whose_turn() == perspective;
                trace!(depth = depth + 1, width = children.len(), is_maximizing, "descend");
                frames.push(Frame::new(children, is_maximizing));
                self.stats.record_descent(depth + 1);
                continue;
            };
            self.stats.record_terminal(value);

            // Propagate upward until a frame has an unvisited sibling.
            loop {
                let top = frames.len() - 1;
                let frame = &mut frames[top];
                frame.resolve(value);
                if frame.advance() {
                    break;
                }
                if top == 0 {
                    debug!(value, nodes = visited, %perspective, root = ?board, "search complete");
                    return Ok(value);
                }
                value = frame.combine();
                trace!(depth = top, value, "ascend");
                frames.truncate(top);
                self.stats.frames_popped += 1;
            }
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
