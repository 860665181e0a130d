//! Win and tie detection over a board snapshot.

use crate::board::{BoardState, Marker};
use crate::config::WINNING_LINES;

/// First line whose three cells hold the same marker.
pub fn winning_line(board: &BoardState) -> Option<[usize; 3]> {
    WINNING_LINES.iter().copied().find(|&[a, b, c]| {
        let cell = board.cells[a];
        cell.is_some() && cell == board.cells[b] && cell == board.cells[c]
    })
}

/// Marker that completed a line, if any.
pub fn winner(board: &BoardState) -> Option<Marker> {
    winning_line(board).and_then(|[a, _, _]| board.cells[a])
}

/// `true` if any line holds three identical markers.
pub fn check_win(board: &BoardState) -> bool {
    winning_line(board).is_some()
}

/// `true` if every cell is occupied.
///
/// This says nothing about winners; callers check [`check_win`] first.
pub fn check_tie(board: &BoardState) -> bool {
    board.is_full()
}
