//! Board representation for tic-tac-toe

pub mod board;


pub use board::Board;

use std::fmt;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }

    /// Mark for the player to move, given the turn flag
    #[inline]
    pub fn for_turn(x_is_next: bool) -> Mark {
        if x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
            Mark::Empty => Ok(()),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Row-major index to position. `None` when off the board.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        (idx < TOTAL_CELLS).then(|| Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
