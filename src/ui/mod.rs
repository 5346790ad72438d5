//! GUI module for the tic-tac-toe game
//!
//! A thin egui/eframe front end over [`crate::game::GameState`].

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
pub use board_view::BoardView;
