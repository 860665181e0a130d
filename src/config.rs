use crate::board::Marker;

/// Cells per side of the grid.
pub const BOARD_WIDTH: usize = 3;
/// Total number of cells on the board.
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_WIDTH;

/// Every row, column and diagonal that wins the game.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Markers handed out by seat: the first player always plays `X`.
pub const SEAT_MARKERS: [Marker; 2] = [Marker::X, Marker::O];

/// Names used by the presentation layer when a player leaves theirs blank.
pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// Result line shown when the board fills up without a winner.
pub const TIE_MESSAGE: &str = "It's a tie!";
