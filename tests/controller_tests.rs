use tictactoe::{
    BoardError, BoardState, GameController, GameStatus, Marker, MoveResult, Notification,
    NotificationLog, Presenter, Rejection,
};

fn started() -> GameController<NotificationLog> {
    let mut controller = GameController::new(NotificationLog::new());
    controller.start("Alice", "Bob");
    controller
}

#[test]
fn test_start_renders_empty_board() {
    let controller = started();
    assert_eq!(
        controller.presenter().events,
        vec![Notification::Render(BoardState::default())]
    );
}

#[test]
fn test_move_renders_new_board() {
    let mut controller = started();
    assert_eq!(controller.play(4).unwrap(), MoveResult::Placed);

    let events = &controller.presenter().events;
    assert_eq!(events.len(), 2);
    match &events[1] {
        Notification::Render(board) => assert_eq!(board.cells[4], Some(Marker::X)),
        other => panic!("expected render, got {:?}", other),
    }
    assert_eq!(controller.presenter().last_result(), None);
}

#[test]
fn test_win_renders_then_reports() {
    let mut controller = started();
    for m in [0, 3, 1, 4] {
        controller.play(m).unwrap();
    }
    controller.presenter_mut().clear();

    assert_eq!(controller.play(2).unwrap(), MoveResult::Won);
    let events = &controller.presenter().events;
    assert_eq!(events.len(), 2);
    match &events[0] {
        Notification::Render(board) => assert_eq!(board.cells[2], Some(Marker::X)),
        other => panic!("expected render first, got {:?}", other),
    }
    assert_eq!(events[1], Notification::Result("Alice wins!".to_string()));
}

#[test]
fn test_tie_reports_message() {
    let mut controller = started();
    let mut last = MoveResult::Placed;
    for m in [0, 1, 2, 3, 5, 4, 6, 8, 7] {
        last = controller.play(m).unwrap();
    }
    assert_eq!(last, MoveResult::Tie);
    assert_eq!(controller.presenter().last_result(), Some("It's a tie!"));
    assert_eq!(
        controller
            .presenter()
            .events
            .iter()
            .filter(|n| matches!(n, Notification::Result(_)))
            .count(),
        1
    );
}

#[test]
fn test_idle_move_emits_nothing() {
    let mut controller = GameController::new(NotificationLog::new());
    assert_eq!(
        controller.play(5).unwrap(),
        MoveResult::Rejected(Rejection::Inactive)
    );
    assert!(controller.presenter().events.is_empty());
    assert!(controller.engine().board().is_empty());
}

#[test]
fn test_rejected_moves_emit_nothing() {
    let mut controller = started();
    controller.play(0).unwrap();
    let count = controller.presenter().events.len();

    assert_eq!(
        controller.play(0).unwrap(),
        MoveResult::Rejected(Rejection::Occupied)
    );
    assert_eq!(controller.play(9).unwrap_err(), BoardError::InvalidIndex(9));
    assert_eq!(controller.presenter().events.len(), count);
}

#[test]
fn test_reset_renders_empty_board_without_result() {
    let mut controller = started();
    for m in [0, 3, 1, 4, 2] {
        controller.play(m).unwrap();
    }
    controller.presenter_mut().clear();

    controller.reset();
    assert_eq!(controller.engine().status(), GameStatus::Idle);
    assert!(controller.engine().players().is_none());
    assert_eq!(
        controller.presenter().events,
        vec![Notification::Render(BoardState::default())]
    );
}

struct Counter {
    renders: usize,
    results: Vec<String>,
}

impl Presenter for Counter {
    fn render(&mut self, _board: &BoardState) {
        self.renders += 1;
    }

    fn display_result(&mut self, message: &str) {
        self.results.push(message.to_string());
    }
}

#[test]
fn test_borrowed_presenter() {
    let mut counter = Counter {
        renders: 0,
        results: Vec::new(),
    };
    {
        let mut controller = GameController::new(&mut counter);
        controller.start("Player 1", "Player 2");
        for m in [0, 3, 1, 4, 2] {
            controller.play(m).unwrap();
        }
    }
    assert_eq!(counter.renders, 6);
    assert_eq!(counter.results, vec!["Player 1 wins!".to_string()]);
}
