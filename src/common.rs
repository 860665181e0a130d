//! Common types for tic-tac-toe: board errors and move results.

/// Why a move was refused without changing any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// No game is in progress (never started, reset, or already finished).
    Inactive,
    /// The target cell already holds a marker.
    Occupied,
}

/// Result of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveResult {
    /// Marker placed, turn passed to the other player.
    Placed,
    /// Marker placed and it completed a line.
    Won,
    /// Marker placed and it filled the last empty cell.
    Tie,
    /// Move ignored; nothing changed.
    Rejected(Rejection),
}

impl MoveResult {
    /// `true` if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Won | MoveResult::Tie)
    }

    /// `true` if a marker was written to the board.
    pub fn is_placed(&self) -> bool {
        !matches!(self, MoveResult::Rejected(_))
    }
}

/// Errors returned by board and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside `0..9`.
    InvalidIndex(usize),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex(index) => {
                write!(f, "Cell index {} is out of range", index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
