//! Game board state: nine cells, each empty or holding a player's marker.

use crate::common::BoardError;
use crate::config::{BOARD_CELLS, BOARD_WIDTH};
use core::fmt;

/// Symbol a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// The marker of the opposing player.
    pub fn other(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Single-character symbol used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell; `None` is empty.
pub type Cell = Option<Marker>;

/// Read-only snapshot of the board, handed out instead of the live grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub cells: [Cell; BOARD_CELLS],
}

impl BoardState {
    /// Cell at `index`.
    pub fn get(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::InvalidIndex(index))
    }

    /// Number of cells holding a marker.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells.iter().filter(|c| **c == Some(marker)).count()
    }

    /// `true` once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// `true` if every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

/// Draws the grid; empty cells show their 1-based number so a player can
/// see which key to press.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_WIDTH {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..BOARD_WIDTH {
                let index = row * BOARD_WIDTH + col;
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[index] {
                    Some(marker) => write!(f, " {} ", marker)?,
                    None => write!(f, " {} ", index + 1)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The authoritative cell grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Place `marker` on `index` if that cell is empty.
    ///
    /// Returns `Ok(false)` and leaves the board untouched when the cell is
    /// already occupied.
    pub fn set_marker(&mut self, index: usize, marker: Marker) -> Result<bool, BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::InvalidIndex(index))?;
        if cell.is_some() {
            return Ok(false);
        }
        *cell = Some(marker);
        Ok(true)
    }

    /// Cell at `index`.
    pub fn get(&self, index: usize) -> Result<Cell, BoardError> {
        self.state().get(index)
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }

    /// Copy of the current cells.
    pub fn state(&self) -> BoardState {
        BoardState::from(self)
    }

    /// Number of cells holding a marker.
    pub fn occupied(&self) -> usize {
        self.state().occupied()
    }

    /// `true` once no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.state().is_full()
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState { cells: b.cells }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board { cells: state.cells }
    }
}
