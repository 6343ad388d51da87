//! Shared helpers for solver integration tests.

use std::collections::HashSet;

use ttt_core::{terminal_value, Board, Player};

/// Every distinct board reachable from the empty board by legal play,
/// including finished games. Play stops at the first win.
#[allow(dead_code)]
pub fn reachable_boards() -> Vec<Board> {
    let mut seen: HashSet<Board> = HashSet::new();
    let mut order = Vec::new();
    let mut to_explore = vec![Board::new()];

    while let Some(board) = to_explore.pop() {
        if !seen.insert(board) {
            continue;
        }
        order.push(board);
        if terminal_value(&board, Player::X).is_none() {
            to_explore.extend(board.possible());
        }
    }
    order
}

/// Install a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
