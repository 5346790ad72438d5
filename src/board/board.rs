//! Board snapshot

use super::{Mark, Pos, TOTAL_CELLS};

/// A 3x3 board, cells stored in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Get mark by row-major index (`None` off the board)
    #[inline]
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    #[inline]
    pub fn cells(&self) -> &[Mark; TOTAL_CELLS] {
        &self.cells
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a mark, overwriting whatever is there.
    /// Occupancy checks belong to the caller.
    #[inline]
    pub fn place(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Number of filled cells
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// No empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Build a board from a row-major cell array
    pub fn from_cells(cells: [Mark; TOTAL_CELLS]) -> Self {
        Self { cells }
    }
}
