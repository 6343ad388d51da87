//! Search statistics tracking.

use std::time::Instant;

use tracing::info;
use ttt_core::{DRAW, LOSS, WIN};

/// Statistics collected during evaluation.
///
/// Terminal outcomes are counted from the perspective the search was run
/// for, so the same tree yields swapped `wins`/`losses` for X and O.
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Positions examined (each tree node once)
    pub nodes_visited: u64,

    /// Frames pushed on descent (root frame not counted)
    pub frames_pushed: u64,

    /// Frames popped after combining their values into the parent
    pub frames_popped: u64,

    /// Terminal positions (win, loss or full board)
    pub terminal_positions: u64,

    /// Maximum frame depth reached (root = 0)
    pub max_depth: u64,

    /// Breakdown of terminal outcomes
    pub wins: u64,
    pub losses: u64,
    pub draws: u64,

    /// For rate calculation
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record a terminal position outcome
    pub fn record_terminal(&mut self, outcome: i8) {
        self.terminal_positions += 1;
        match outcome {
            WIN => self.wins += 1,
            LOSS => self.losses += 1,
            DRAW => self.draws += 1,
            _ => {}
        }
    }

    /// Record a frame push at `depth`.
    #[inline]
    pub fn record_descent(&mut self, depth: usize) {
        self.frames_pushed += 1;
        self.max_depth = self.max_depth.max(depth as u64);
    }

    /// Fold another run's counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_visited += other.nodes_visited;
        self.frames_pushed += other.frames_pushed;
        self.frames_popped += other.frames_popped;
        self.terminal_positions += other.terminal_positions;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.wins += other.wins;
        self.losses += other.losses;
        self.draws += other.draws;
    }

    /// Get current nodes per second
    pub fn nodes_per_sec(&self) -> f64 {
        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                return self.nodes_visited as f64 / elapsed;
            }
        }
        0.0
    }

    /// Log a summary of the counters
    pub fn log_summary(&self) {
        info!(
            nodes = self.nodes_visited,
            frames = self.frames_pushed,
            max_depth = self.max_depth,
            nodes_per_sec = self.nodes_per_sec() as u64,
            "search summary"
        );
        info!(
            terminals = self.terminal_positions,
            wins = self.wins,
            losses = self.losses,
            draws = self.draws,
            "terminal outcomes"
        );
    }
}
