//! Derived, read-only view of the game for rendering

use std::fmt;

use crate::board::{Board, Mark, Pos};
use crate::rules::{find_winning_line, is_draw, winner, WinningLine};

use super::state::GameState;

/// Status line shown above the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {}", mark),
            GameStatus::Draw => write!(f, "Draw!"),
            GameStatus::NextPlayer(mark) => write!(f, "Next player: {}", mark),
        }
    }
}

/// One clickable history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index to pass to `GameState::jump_to`
    pub step: usize,
    pub last_move: Option<Pos>,
    /// Entry is the active step (rendered emphasized)
    pub selected: bool,
}

impl MoveEntry {
    pub fn label(&self) -> String {
        match self.last_move {
            Some(pos) => format!("Go to move #{} @ {}", self.step, pos),
            None => "Go to game start".to_string(),
        }
    }
}

/// Everything the presentation layer needs after a state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub board: Board,
    pub winning_line: Option<WinningLine>,
    pub winner: Option<Mark>,
    pub is_draw: bool,
    pub status: GameStatus,
    /// History entries in display order
    pub moves: Vec<MoveEntry>,
    pub ascending: bool,
}

impl GameView {
    pub fn derive(state: &GameState) -> Self {
        let board = *state.current_board();
        let winning_line = find_winning_line(&board);
        let winner = winner(&board);
        let is_draw = is_draw(&board);

        let status = match winner {
            Some(mark) => GameStatus::Winner(mark),
            None if is_draw => GameStatus::Draw,
            None => GameStatus::NextPlayer(state.next_mark()),
        };

        let mut moves: Vec<MoveEntry> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveEntry {
                step,
                last_move: entry.last_move,
                selected: step == state.current_step(),
            })
            .collect();
        if !state.history_ascending() {
            moves.reverse();
        }

        Self {
            board,
            winning_line,
            winner,
            is_draw,
            status,
            moves,
            ascending: state.history_ascending(),
        }
    }

    /// Label for the order toggle button
    pub fn order_label(&self) -> &'static str {
        if self.ascending {
            "Sorted by ascending order"
        } else {
            "Sorted by descending order"
        }
    }

    /// Cell belongs to the winning line
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}
