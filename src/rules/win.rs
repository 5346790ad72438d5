//! Win condition checking
//!
//! Lines are scanned in a fixed priority order so that a board holding
//! more than one completed line always reports the same one: rows top to
//! bottom, columns left to right, then the main diagonal before the
//! anti-diagonal.

use crate::board::{Board, Mark};

/// Three row-major cell indices forming a line
pub type WinningLine = [usize; 3];

/// All 8 lines, in detection priority order
pub const WIN_LINES: [WinningLine; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonal
    [2, 4, 6], // Anti-diagonal
];

/// Find the first line whose three cells hold the same non-empty mark
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Owner of the winning line, if any
pub fn winner(board: &Board) -> Option<Mark> {
    find_winning_line(board).map(|[a, _, _]| board.cells()[a])
}

/// No winner and no empty cell left
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && find_winning_line(board).is_none()
}
