//! Game rules for tic-tac-toe
//!
//! Three equal marks on a row, column or diagonal win. A full board
//! with no such line is a draw.

pub mod win;

pub use win::{find_winning_line, is_draw, winner, WinningLine, WIN_LINES};
