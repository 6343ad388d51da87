//! Error types for board construction and moves.

use thiserror::Error;

/// Errors raised by [`Board`](crate::Board) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: u8 },

    #[error("position {position} is off the board (expected 0-8)")]
    OutOfRange { position: u8 },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at position {position}")]
    InvalidCell { character: char, position: usize },
}

/// Convenience result alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
