//! Board invariants over random legal games.
//!
//! Plays seeded random games from the empty board and verifies at every ply:
//! - mark counts never differ by more than one (X ahead or equal)
//! - `play` only ever fills an empty cell and leaves the parent untouched
//! - `possible()` agrees with `legal_positions()` + `play`
//! - the game stops exactly when `terminal_value` becomes definite

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ttt_core::{terminal_value, Board, Error, Player, Pos, DRAW};

const GAMES: usize = 500;

fn counts(board: &Board) -> (usize, usize) {
    let cells = board.cells();
    let x = cells.iter().filter(|&&c| c == Some(Player::X)).count();
    let o = cells.iter().filter(|&&c| c == Some(Player::O)).count();
    (x, o)
}

/// Play one random game, returning every board along the way (root first).
fn random_game(rng: &mut StdRng) -> Vec<Board> {
    let mut history = vec![Board::new()];
    let mut board = Board::new();
    while terminal_value(&board, Player::X).is_none() {
        let legal = board.legal_positions();
        let pos = legal[rng.random_range(0..legal.len())];
        board = board.play(pos).expect("legal position must be playable");
        history.push(board);
    }
    history
}

#[test]
fn test_random_games_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(0x7117_7ac7);
    let mut errors: Vec<String> = Vec::new();

    for game in 0..GAMES {
        let history = random_game(&mut rng);

        for pair in history.windows(2) {
            let (parent, child) = (pair[0], pair[1]);
            let snapshot = parent.cells();

            let (x, o) = counts(&child);
            if !(x == o || x == o + 1) {
                errors.push(format!("game {game}: bad counts x={x} o={o} in {child:?}"));
            }

            match parent.diff(&child) {
                Some(pos) => {
                    if child.cell(pos) != Some(parent.whose_turn()) {
                        errors.push(format!("game {game}: wrong mark at {pos:?} in {child:?}"));
                    }
                    if parent.play(pos) != Ok(child) {
                        errors.push(format!("game {game}: replay mismatch at {pos:?}"));
                    }
                }
                None => errors.push(format!("game {game}: {parent:?} -> {child:?} is not one move")),
            }

            if parent.cells() != snapshot {
                errors.push(format!("game {game}: parent mutated"));
            }
        }

        for board in &history {
            let via_play: Vec<Board> = board
                .legal_positions()
                .into_iter()
                .map(|pos| board.play(pos).expect("legal position must be playable"))
                .collect();
            if board.possible() != via_play {
                errors.push(format!("game {game}: possible() mismatch on {board:?}"));
            }
        }

        let last = history.last().expect("history is never empty");
        let x_view = terminal_value(last, Player::X);
        let o_view = terminal_value(last, Player::O);
        match (x_view, o_view) {
            (Some(a), Some(b)) if a == -b => {}
            other => errors.push(format!("game {game}: terminal views {other:?} on {last:?}")),
        }
        if last.winner().is_none() && x_view != Some(DRAW) {
            errors.push(format!("game {game}: no winner but not a draw on {last:?}"));
        }
        for board in &history[..history.len() - 1] {
            if terminal_value(board, Player::X).is_some() {
                errors.push(format!("game {game}: play continued past {board:?}"));
            }
        }
    }

    assert!(errors.is_empty(), "{} failures:\n{}", errors.len(), errors.join("\n"));
}

#[test]
fn test_occupied_cells_reject_every_move() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let history = random_game(&mut rng);
        let last = history.last().expect("history is never empty");
        for pos in Pos::all().filter(|&pos| !last.is_empty(pos)) {
            assert_eq!(last.play(pos), Err(Error::InvalidMove { position: pos.0 }));
        }
    }
}

#[test]
fn test_board_serde_roundtrip() {
    let board: Board = "xo.xo.x..".parse().unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);

    let pos_json = serde_json::to_string(&Pos(6)).unwrap();
    assert_eq!(pos_json, "6");
    let player: Player = serde_json::from_str("\"O\"").unwrap();
    assert_eq!(player, Player::O);
}
