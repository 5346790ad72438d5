//! Game state: history snapshots, time travel and turn tracking

use tracing::{debug, trace};

use crate::board::{Board, Mark, Pos};
use crate::rules::find_winning_line;

use super::error::GameError;
use super::history::HistoryEntry;
use super::view::GameView;

/// Why a move request left the state unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The board at the current step already has a winning line
    GameOver,
    /// The target cell is taken
    Occupied,
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed { mark: Mark, pos: Pos, step: usize },
    Ignored(IgnoreReason),
}

/// Main game state
///
/// History always holds at least the starting entry, and `current_step`
/// always indexes into it. The mark count of the board at `current_step`
/// equals `current_step`.
#[derive(Debug, Clone)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    x_is_next: bool,
    history_ascending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
            x_is_next: true,
            history_ascending: true,
        }
    }

    /// New game with the given move-list order
    pub fn with_order(ascending: bool) -> Self {
        Self {
            history_ascending: ascending,
            ..Self::new()
        }
    }

    #[inline]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest history entry
    #[inline]
    pub fn last_step(&self) -> usize {
        self.history.len() - 1
    }

    #[inline]
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    #[inline]
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.x_is_next)
    }

    #[inline]
    pub fn history_ascending(&self) -> bool {
        self.history_ascending
    }

    /// Board at the selected step
    #[inline]
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// Place the next player's mark at `index` (row-major, 0..9).
    ///
    /// Any entries after the current step are discarded before the new one
    /// is appended. Moving on a won board or a filled cell does nothing.
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let pos = Pos::from_index(index).ok_or(GameError::InvalidCell { index })?;
        let current = self.current_board();

        if find_winning_line(current).is_some() {
            trace!(index, step = self.current_step, "move ignored: game over");
            return Ok(MoveOutcome::Ignored(IgnoreReason::GameOver));
        }
        if !current.is_empty(pos) {
            trace!(index, step = self.current_step, "move ignored: cell occupied");
            return Ok(MoveOutcome::Ignored(IgnoreReason::Occupied));
        }

        let mark = self.next_mark();
        let mut board = *current;
        board.place(pos, mark);

        let discarded = self.history.len() - (self.current_step + 1);
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::after_move(board, pos));
        self.current_step = self.last_step();
        self.x_is_next = !self.x_is_next;

        debug!(%mark, %pos, step = self.current_step, discarded, "move applied");
        Ok(MoveOutcome::Placed {
            mark,
            pos,
            step: self.current_step,
        })
    }

    /// Select a history entry as the active board. History is kept intact.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        if step >= self.history.len() {
            return Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "jumped to step");
        Ok(())
    }

    /// Flip the move-list display order
    pub fn toggle_order(&mut self) {
        self.history_ascending = !self.history_ascending;
        debug!(ascending = self.history_ascending, "history order toggled");
    }

    /// Read-only view for the presentation layer
    pub fn view(&self) -> GameView {
        GameView::derive(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut GameState, moves: &[usize]) {
        for &idx in moves {
            state.apply_move(idx).unwrap();
        }
    }

    fn assert_invariants(state: &GameState) {
        assert!(!state.history().is_empty());
        assert_eq!(state.history()[0].board, Board::new());
        assert!(state.current_step() < state.history().len());
        assert_eq!(state.current_board().mark_count(), state.current_step());
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_step(), 0);
        assert!(state.x_is_next());
        assert!(state.history_ascending());
        assert_eq!(state.history()[0].last_move, None);
        assert_invariants(&state);
    }

    #[test]
    fn test_first_move_places_x() {
        let mut state = GameState::new();
        let outcome = state.apply_move(0).unwrap();

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                mark: Mark::X,
                pos: Pos::new(0, 0),
                step: 1
            }
        );
        assert_eq!(state.current_board().cell(0), Some(Mark::X));
        assert!(!state.x_is_next());
        assert_invariants(&state);
    }

    #[test]
    fn test_marks_alternate() {
        let mut state = GameState::new();
        play(&mut state, &[4, 0, 8]);
        let board = state.current_board();
        assert_eq!(board.cell(4), Some(Mark::X));
        assert_eq!(board.cell(0), Some(Mark::O));
        assert_eq!(board.cell(8), Some(Mark::X));
        assert_eq!(state.next_mark(), Mark::O);
        assert_invariants(&state);
    }

    #[test]
    fn test_move_records_coordinates() {
        let mut state = GameState::new();
        play(&mut state, &[5, 7]);
        let entry = &state.history()[1];
        assert_eq!(entry.move_row(), Some(1));
        assert_eq!(entry.move_col(), Some(2));
        let entry = &state.history()[2];
        assert_eq!(entry.move_row(), Some(2));
        assert_eq!(entry.move_col(), Some(1));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[4]);
        let before = state.clone();

        let outcome = state.apply_move(4).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::Occupied));
        assert_eq!(state.history(), before.history());
        assert_eq!(state.current_step(), before.current_step());
        assert_eq!(state.x_is_next(), before.x_is_next());
    }

    #[test]
    fn test_move_after_win_is_ignored() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 3, 4, 6]);
        let len = state.history().len();
        let board = *state.current_board();

        let outcome = state.apply_move(8).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::GameOver));
        assert_eq!(state.history().len(), len);
        assert_eq!(state.current_step(), 5);
        assert_eq!(*state.current_board(), board);
    }

    #[test]
    fn test_invalid_cell_is_rejected() {
        let mut state = GameState::new();
        play(&mut state, &[0]);
        let err = state.apply_move(9).unwrap_err();
        assert_eq!(err, GameError::InvalidCell { index: 9 });
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2]);
        state.jump_to(1).unwrap();

        assert_eq!(state.current_step(), 1);
        assert_eq!(state.history().len(), 4);
        assert!(!state.x_is_next());
        assert_invariants(&state);

        state.jump_to(2).unwrap();
        assert!(state.x_is_next());
        state.jump_to(3).unwrap();
        assert!(!state.x_is_next());
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1]);
        state.jump_to(1).unwrap();

        let err = state.jump_to(3).unwrap_err();
        assert_eq!(err, GameError::InvalidStep { step: 3, len: 3 });
        assert_eq!(state.current_step(), 1);
        assert!(!state.x_is_next());
    }

    #[test]
    fn test_move_after_jump_truncates_future() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2, 3]);
        state.jump_to(0).unwrap();

        let outcome = state.apply_move(8).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                mark: Mark::X,
                pos: Pos::new(2, 2),
                step: 1
            }
        );
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.current_board().cell(0), Some(Mark::Empty));
        assert_eq!(state.current_board().cell(8), Some(Mark::X));
        assert_invariants(&state);
    }

    #[test]
    fn test_move_from_middle_of_history() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2, 3]);
        state.jump_to(2).unwrap();
        play(&mut state, &[6]);

        assert_eq!(state.history().len(), 4);
        assert_eq!(state.history()[3].last_move, Some(Pos::new(2, 0)));
        assert_eq!(state.current_board().cell(6), Some(Mark::X));
        assert_eq!(state.current_board().cell(2), Some(Mark::Empty));
        assert_invariants(&state);
    }

    #[test]
    fn test_ignored_move_after_jump_keeps_future() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 2]);
        state.jump_to(1).unwrap();

        let outcome = state.apply_move(0).unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(IgnoreReason::Occupied));
        assert_eq!(state.history().len(), 4);
        assert_eq!(state.current_step(), 1);
    }

    #[test]
    fn test_jump_back_from_win_allows_play() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1, 3, 4, 6]);
        state.jump_to(4).unwrap();

        let outcome = state.apply_move(8).unwrap();
        assert!(matches!(outcome, MoveOutcome::Placed { mark: Mark::X, step: 5, .. }));
        assert_eq!(state.current_board().cell(6), Some(Mark::Empty));
    }

    #[test]
    fn test_toggle_order() {
        let mut state = GameState::new();
        play(&mut state, &[0, 1]);
        state.toggle_order();
        assert!(!state.history_ascending());
        assert_eq!(state.current_step(), 2);
        assert_eq!(state.history().len(), 3);
        assert!(state.x_is_next());
        state.toggle_order();
        assert!(state.history_ascending());
    }

    #[test]
    fn test_with_order() {
        assert!(!GameState::with_order(false).history_ascending());
        assert!(GameState::with_order(true).history_ascending());
    }

    #[test]
    fn test_full_game_keeps_invariants() {
        let mut state = GameState::new();
        for (i, idx) in [0, 1, 2, 4, 3, 5, 7, 6, 8].into_iter().enumerate() {
            state.apply_move(idx).unwrap();
            assert_eq!(state.current_step(), i + 1);
            assert_invariants(&state);
        }
        assert!(state.current_board().is_full());
    }
}
