//! Game engine: move application, history and time travel
//!
//! [`GameState`] is the only mutable piece. The presentation layer calls
//! [`GameState::apply_move`], [`GameState::jump_to`] and
//! [`GameState::toggle_order`], then re-reads [`GameState::view`].

mod error;
mod history;
mod state;
mod view;

pub use error::GameError;
pub use history::HistoryEntry;
pub use state::{GameState, IgnoreReason, MoveOutcome};
pub use view::{GameStatus, GameView, MoveEntry};
