//! Full game-tree counts from the empty board.

mod common;

use ttt_core::{Board, Player};
use ttt_solver::Solver;

#[test]
fn test_full_tree_counts() {
    common::init_tracing();

    let mut solver = Solver::new();
    let value = solver.value(&Board::new(), Player::X).unwrap();
    solver.stats.log_summary();

    let stats = &solver.stats;
    assert_eq!(value, 0);
    assert_eq!(stats.nodes_visited, 549_946);
    assert_eq!(stats.terminal_positions, 255_168);
    assert_eq!(stats.wins, 131_184);
    assert_eq!(stats.losses, 77_904);
    assert_eq!(stats.draws, 46_080);
    assert_eq!(stats.frames_pushed, 549_946 - 255_168);
    assert_eq!(stats.frames_popped, stats.frames_pushed);
    assert_eq!(stats.max_depth, 9);
}

#[test]
fn test_full_tree_from_o_perspective_swaps_outcomes() {
    let mut solver = Solver::new();
    assert_eq!(solver.value(&Board::new(), Player::O), Ok(0));
    assert_eq!(solver.stats.wins, 77_904);
    assert_eq!(solver.stats.losses, 131_184);
    assert_eq!(solver.stats.draws, 46_080);
}

#[test]
fn test_budget_boundary_on_full_tree() {
    use ttt_solver::{SearchConfig, SearchError};

    let exact = SearchConfig::new().with_node_budget(549_946);
    assert_eq!(Solver::with_config(exact).value(&Board::new(), Player::X), Ok(0));

    let short = SearchConfig::new().with_node_budget(549_945);
    assert_eq!(
        Solver::with_config(short).value(&Board::new(), Player::X),
        Err(SearchError::BudgetExhausted { budget: 549_945 })
    );
}
