//! Tic-tac-toe board model with immutable, copy-on-move boards.
//!
//! # Board Layout
//!
//! ```text
//! Cell indices (row-major order):
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//! ```
//!
//! # Compact Encoding
//!
//! ```text
//! 9 characters, one per cell in index order:
//!   'x' = X, 'o' = O, '.' = empty   (parsing also accepts ' ' and upper case)
//!
//! "xo.xo.x.." is:
//!   x|o|
//!   x|o|
//!   x| |
//! ```
//!
//! X always moves first, so whose turn it is follows from the number of
//! marks on the board and is never stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod error;

pub use error::{Error, Result};

/// Score for the perspective player winning.
pub const WIN: i8 = 1;
/// Score for a full board with no winner.
pub const DRAW: i8 = 0;
/// Score for the perspective player losing.
pub const LOSS: i8 = -1;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player identifier. X moves first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Lowercase mark used in rendering and the compact encoding.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }

    /// Both players, in winner scan order.
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::X, Player::O].into_iter()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => f.write_str("X"),
            Player::O => f.write_str("O"),
        }
    }
}

/// Position on the 3x3 board (0-8).
///
/// Layout:
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos(pub u8);

impl Pos {
    /// Create a position from row and column (0-2 each).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Pos {
        debug_assert!(row < 3 && col < 3);
        Pos(row * 3 + col)
    }

    /// Get the row (0-2).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// Check if this is a valid position (0-8).
    #[inline]
    pub fn is_valid(self) -> bool {
        (self.0 as usize) < CELLS
    }

    /// Iterate over all 9 positions.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELLS as u8).map(Pos)
    }
}

impl From<u8> for Pos {
    fn from(index: u8) -> Pos {
        Pos(index)
    }
}

/// Winning lines, in scan order: columns, then rows, then diagonals.
pub const WIN_LINES: [[Pos; 3]; 8] = [
    [Pos(0), Pos(3), Pos(6)], // Col 0
    [Pos(1), Pos(4), Pos(7)], // Col 1
    [Pos(2), Pos(5), Pos(8)], // Col 2
    [Pos(0), Pos(1), Pos(2)], // Row 0
    [Pos(3), Pos(4), Pos(5)], // Row 1
    [Pos(6), Pos(7), Pos(8)], // Row 2
    [Pos(0), Pos(4), Pos(8)], // Main diagonal
    [Pos(2), Pos(4), Pos(6)], // Anti-diagonal
];

/// Immutable board state.
///
/// `Board` is `Copy`: [`Board::play`] returns a fresh board and never touches
/// the receiver, so boards never share storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; CELLS],
}

impl Board {
    /// Create a new empty board with X to move.
    #[inline]
    pub fn new() -> Board {
        Board::default()
    }

    /// Create a board from raw cells.
    ///
    /// The cells are taken as-is; mark counts are not checked against a legal
    /// move sequence.
    #[inline]
    pub fn from_cells(cells: [Option<Player>; CELLS]) -> Board {
        Board { cells }
    }

    /// Get the raw cells in index order.
    #[inline]
    pub fn cells(&self) -> [Option<Player>; CELLS] {
        self.cells
    }

    /// Get the mark at a position, or `None` if empty (or off the board).
    #[inline]
    pub fn cell(&self, pos: Pos) -> Option<Player> {
        self.cells.get(pos.0 as usize).copied().flatten()
    }

    /// Check if the cell at a position is empty.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.is_valid() && self.cells[pos.0 as usize].is_none()
    }

    /// Cells grouped by row, top to bottom.
    pub fn rows(&self) -> [[Option<Player>; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Cells grouped by column, left to right.
    pub fn columns(&self) -> [[Option<Player>; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[3], c[6]], [c[1], c[4], c[7]], [c[2], c[5], c[8]]]
    }

    /// Number of marks placed so far (0-9).
    #[inline]
    pub fn turn(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    /// Player to move: X on even turns, O on odd turns.
    #[inline]
    pub fn whose_turn(&self) -> Player {
        if self.turn() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Check if every cell is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.turn() as usize == CELLS
    }

    /// Place the current player's mark at `pos`, returning the new board.
    ///
    /// Fails with [`Error::InvalidMove`] if the cell is taken and
    /// [`Error::OutOfRange`] if `pos` is not on the board.
    pub fn play(&self, pos: Pos) -> Result<Board> {
        if !pos.is_valid() {
            return Err(Error::OutOfRange { position: pos.0 });
        }
        if !self.is_empty(pos) {
            return Err(Error::InvalidMove { position: pos.0 });
        }
        let mut next = *self;
        next.cells[pos.0 as usize] = Some(self.whose_turn());
        Ok(next)
    }

    /// Empty positions in ascending index order.
    pub fn legal_positions(&self) -> Vec<Pos> {
        Pos::all().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Every board reachable by one move, in ascending index order.
    ///
    /// Returns an empty vector only when the board is full.
    pub fn possible(&self) -> Vec<Board> {
        let mover = Some(self.whose_turn());
        Pos::all()
            .filter(|&pos| self.is_empty(pos))
            .map(|pos| {
                let mut next = *self;
                next.cells[pos.0 as usize] = mover;
                next
            })
            .collect()
    }

    /// Check if the given player owns all three cells of some line.
    pub fn has_won(&self, player: Player) -> bool {
        self.line_for(player).is_some()
    }

    fn line_for(&self, player: Player) -> Option<[Pos; 3]> {
        WIN_LINES
            .iter()
            .find(|line| line.iter().all(|&pos| self.cell(pos) == Some(player)))
            .copied()
    }

    /// Check if either player has won.
    ///
    /// X is scanned over every line before O. A board where both players own
    /// a line cannot arise from legal play; for such a board X is reported.
    pub fn winner(&self) -> Option<Player> {
        Player::all().find(|&player| self.has_won(player))
    }

    /// Get the winning line of the winner, if any.
    /// Returns the first line found in [`WIN_LINES`] order.
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        self.winner().and_then(|player| self.line_for(player))
    }

    /// Score of a finished game from `perspective`'s point of view.
    /// See [`terminal_value`].
    #[inline]
    pub fn terminal_value(&self, perspective: Player) -> Option<i8> {
        terminal_value(self, perspective)
    }

    /// The single position where `child` holds a mark and `self` does not.
    ///
    /// Returns `None` unless `child` is exactly one move ahead of `self`.
    pub fn diff(&self, child: &Board) -> Option<Pos> {
        let mut changed = Pos::all().filter(|&pos| self.cell(pos) != child.cell(pos));
        let pos = changed.next()?;
        if changed.next().is_some() || self.cell(pos).is_some() {
            return None;
        }
        Some(pos)
    }

    /// Compact 9-character encoding, `.` for empty cells.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or('.', Player::to_char))
            .collect()
    }
}

/// Score a board from `perspective`'s point of view if the game is over.
///
/// - `Some(WIN)` if `perspective` has a line
/// - `Some(LOSS)` if the opponent has a line
/// - `Some(DRAW)` if the board is full with no line
/// - `None` if the game is still undecided
pub fn terminal_value(board: &Board, perspective: Player) -> Option<i8> {
    match board.winner() {
        Some(w) if w == perspective => Some(WIN),
        Some(_) => Some(LOSS),
        None if board.is_full() => Some(DRAW),
        None => None,
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Board> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != CELLS {
            return Err(Error::InvalidLength {
                expected: CELLS,
                got: chars.len(),
            });
        }
        let mut cells = [None; CELLS];
        for (position, (&character, cell)) in chars.iter().zip(cells.iter_mut()).enumerate() {
            *cell = match character {
                '.' | ' ' => None,
                'x' | 'X' => Some(Player::X),
                'o' | 'O' => Some(Player::O),
                _ => return Err(Error::InvalidCell { character, position }),
            };
        }
        Ok(Board { cells })
    }
}

/// Renders the grid: cells joined by `|`, rows split by `-----`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n-----\n")?;
            }
            let line: Vec<String> = row
                .iter()
                .map(|c| c.map_or(' ', Player::to_char).to_string())
                .collect();
            f.write_str(&line.join("|"))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.encode())
    }
}
