//! Move history entries

use crate::board::{Board, Pos};

/// One board snapshot plus the move that produced it.
///
/// The entry at step 0 is the empty starting board and carries no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    pub last_move: Option<Pos>,
}

impl HistoryEntry {
    /// The game-start entry
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub fn after_move(board: Board, pos: Pos) -> Self {
        Self {
            board,
            last_move: Some(pos),
        }
    }

    #[inline]
    pub fn move_row(&self) -> Option<u8> {
        self.last_move.map(|p| p.row)
    }

    #[inline]
    pub fn move_col(&self) -> Option<u8> {
        self.last_move.map(|p| p.col)
    }
}
