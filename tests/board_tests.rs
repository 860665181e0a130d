use tictactoe::{Board, BoardError, BoardState, Marker, BOARD_CELLS};

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    let state = board.state();
    assert_eq!(state.cells.len(), BOARD_CELLS);
    assert!(state.is_empty());
    assert_eq!(board.occupied(), 0);
}

#[test]
fn test_set_marker_on_empty_cell() {
    let mut board = Board::new();
    assert!(board.set_marker(4, Marker::X).unwrap());
    assert_eq!(board.get(4).unwrap(), Some(Marker::X));
    assert_eq!(board.occupied(), 1);
}

#[test]
fn test_set_marker_occupied_is_rejected() {
    let mut board = Board::new();
    board.set_marker(0, Marker::X).unwrap();
    let before = board.state();

    assert!(!board.set_marker(0, Marker::O).unwrap());
    assert!(!board.set_marker(0, Marker::X).unwrap());
    assert_eq!(board.state(), before);
    assert_eq!(board.get(0).unwrap(), Some(Marker::X));
}

#[test]
fn test_out_of_range_index() {
    let mut board = Board::new();
    assert_eq!(
        board.set_marker(BOARD_CELLS, Marker::X).unwrap_err(),
        BoardError::InvalidIndex(BOARD_CELLS)
    );
    assert_eq!(board.get(42).unwrap_err(), BoardError::InvalidIndex(42));
    assert!(board.state().is_empty());
}

#[test]
fn test_reset_clears_every_cell() {
    let mut board = Board::new();
    for i in 0..BOARD_CELLS {
        let marker = if i % 2 == 0 { Marker::X } else { Marker::O };
        board.set_marker(i, marker).unwrap();
    }
    assert!(board.is_full());

    board.reset();
    assert!(board.state().is_empty());
    board.reset();
    assert_eq!(board, Board::new());
}

#[test]
fn test_snapshot_is_detached() {
    let mut board = Board::new();
    board.set_marker(2, Marker::O).unwrap();
    let mut snapshot = board.state();
    snapshot.cells[2] = None;
    snapshot.cells[3] = Some(Marker::X);

    assert_eq!(board.get(2).unwrap(), Some(Marker::O));
    assert_eq!(board.get(3).unwrap(), None);
}

#[test]
fn test_board_state_roundtrip() {
    let mut board = Board::new();
    board.set_marker(1, Marker::X).unwrap();
    board.set_marker(7, Marker::O).unwrap();

    let state = BoardState::from(&board);
    let mut board2: Board = state.into();
    assert_eq!(board2.state(), state);
    assert!(!board2.set_marker(7, Marker::X).unwrap());
}

#[test]
fn test_board_display() {
    let mut board = Board::new();
    board.set_marker(0, Marker::X).unwrap();
    board.set_marker(4, Marker::O).unwrap();
    let text = board.state().to_string();
    assert_eq!(
        text,
        " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 \n"
    );
}

#[test]
fn test_marker_helpers() {
    assert_eq!(Marker::X.other(), Marker::O);
    assert_eq!(Marker::O.other(), Marker::X);
    assert_eq!(Marker::X.to_string(), "X");
    assert_eq!(Marker::O.symbol(), 'O');
}
