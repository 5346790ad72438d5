//! Tic-tac-toe with move history and time travel
//!
//! Two players alternate placing X and O on a 3x3 grid. Every move is kept
//! as a board snapshot, so any earlier position can be revisited; playing a
//! new move from an earlier position discards the moves that followed it.
//!
//! # Architecture
//!
//! - [`board`]: Cell marks, positions and the 3x3 board
//! - [`rules`]: Winning-line detection and draw check
//! - [`game`]: Game state, history bookkeeping and the derived view
//! - [`config`]: Command-line options
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, Mark};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.apply_move(cell).unwrap();
//! }
//!
//! let view = game.view();
//! assert_eq!(view.winner, Some(Mark::X));
//! assert_eq!(view.status.to_string(), "Winner: X");
//!
//! // Back to the start; the next move replaces the old line of play
//! game.jump_to(0).unwrap();
//! game.apply_move(4).unwrap();
//! assert_eq!(game.history().len(), 2);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use config::Config;
pub use game::{
    GameError, GameState, GameStatus, GameView, HistoryEntry, IgnoreReason, MoveEntry,
    MoveOutcome,
};
pub use rules::{find_winning_line, WinningLine, WIN_LINES};
