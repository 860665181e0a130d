use crate::{
    board::{Board, BoardState, Marker},
    common::{BoardError, MoveResult, Rejection},
    config::{SEAT_MARKERS, TIE_MESSAGE},
    player::Player,
    rules,
};
use alloc::{format, string::String};
use log::{debug, info};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The player holding this marker completed a line.
    Win(Marker),
    /// The board filled up with no line completed.
    Tie,
}

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Before the first start, or after a reset.
    #[default]
    Idle,
    InProgress,
    /// Won or tied; moves are ignored until the next start.
    Terminal(Outcome),
}

impl GameStatus {
    /// `true` only while moves are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

/// Serializable snapshot of the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub players: Option<[Player; 2]>,
    pub current: Option<Marker>,
    pub status: GameStatus,
    pub moves: usize,
}

/// Core game logic: turn order, move validation and result detection.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: Option<[Player; 2]>,
    current: Marker,
    status: GameStatus,
    moves: usize,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self {
            board: Board::new(),
            players: None,
            current: SEAT_MARKERS[0],
            status: GameStatus::Idle,
            moves: 0,
        }
    }
}

impl GameEngine {
    /// Create an idle engine with an empty board and no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new game. The first name plays `X` and moves first.
    ///
    /// Names are used verbatim; substituting placeholders for blank input is
    /// up to the caller.
    pub fn start(&mut self, name1: impl Into<String>, name2: impl Into<String>) {
        let players = [
            Player::new(name1, SEAT_MARKERS[0]),
            Player::new(name2, SEAT_MARKERS[1]),
        ];
        info!(
            "starting game: {} ({}) vs {} ({})",
            players[0].name(),
            players[0].marker(),
            players[1].name(),
            players[1].marker()
        );
        self.players = Some(players);
        self.current = SEAT_MARKERS[0];
        self.moves = 0;
        self.board.reset();
        self.status = GameStatus::InProgress;
    }

    /// Place the current player's marker on `index`.
    ///
    /// An out-of-range index is always an error, whatever the game state.
    /// Moves while no game is in progress and moves onto occupied cells are
    /// rejected without touching any state.
    pub fn play(&mut self, index: usize) -> Result<MoveResult, BoardError> {
        self.board.get(index)?;
        if !self.status.is_active() {
            debug!("ignoring move {} while {:?}", index, self.status);
            return Ok(MoveResult::Rejected(Rejection::Inactive));
        }
        let marker = self.current;
        if !self.board.set_marker(index, marker)? {
            debug!("cell {} already occupied", index);
            return Ok(MoveResult::Rejected(Rejection::Occupied));
        }
        self.moves += 1;
        debug!("{} placed on cell {}", marker, index);

        // win must be checked before tie: a full board can still be a win
        if self.check_win() {
            self.status = GameStatus::Terminal(Outcome::Win(marker));
            info!("{} completed a line", marker);
            Ok(MoveResult::Won)
        } else if self.check_tie() {
            self.status = GameStatus::Terminal(Outcome::Tie);
            info!("board full, game tied");
            Ok(MoveResult::Tie)
        } else {
            self.current = marker.other();
            Ok(MoveResult::Placed)
        }
    }

    /// Clear the board, drop both players and leave the session idle until
    /// the next start.
    pub fn reset(&mut self) {
        debug!("resetting game");
        self.board.reset();
        self.players = None;
        self.current = SEAT_MARKERS[0];
        self.moves = 0;
        self.status = GameStatus::Idle;
    }

    /// Snapshot of the board.
    pub fn board(&self) -> BoardState {
        self.board.state()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// `true` while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Both players, once a game has been started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Player whose turn it is, or who made the final move of a finished
    /// game. `None` when idle.
    pub fn current_player(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Idle => None,
            _ => self.player(self.current),
        }
    }

    /// Player holding `marker`, once a game has been started.
    pub fn player(&self, marker: Marker) -> Option<&Player> {
        self.players
            .as_ref()
            .and_then(|p| p.iter().find(|pl| pl.marker() == marker))
    }

    /// Markers successfully placed since the last start.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    pub fn check_win(&self) -> bool {
        rules::check_win(&self.board.state())
    }

    pub fn check_tie(&self) -> bool {
        rules::check_tie(&self.board.state())
    }

    /// Human-readable result once the game has finished.
    pub fn result_message(&self) -> Option<String> {
        match self.status {
            GameStatus::Terminal(Outcome::Win(marker)) => self
                .player(marker)
                .map(|winner| format!("{} wins!", winner.name())),
            GameStatus::Terminal(Outcome::Tie) => Some(String::from(TIE_MESSAGE)),
            _ => None,
        }
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.state(),
            players: self.players.clone(),
            current: self.current_player().map(Player::marker),
            status: self.status,
            moves: self.moves,
        }
    }
}
