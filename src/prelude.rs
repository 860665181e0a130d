//! Commonly used types and utilities for ease of import.

pub use crate::{
    BoardError, BoardState, GameController, GameEngine, GameStatus, Marker, MoveResult,
    NotificationLog, Outcome, Player, Presenter, Rejection,
};

#[cfg(feature = "std")]
pub use crate::{run_interactive, TerminalPresenter};
