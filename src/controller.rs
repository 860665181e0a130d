//! Orchestrator combining a [`GameEngine`] with a [`Presenter`].

use crate::{
    common::{BoardError, MoveResult},
    game::GameEngine,
    presenter::Presenter,
};
use alloc::string::String;
use log::trace;

/// Forwards user actions into the engine and notifies the presenter.
///
/// Every state-changing action renders the board; a finished game also
/// produces a result message, always after the render. Rejected moves emit
/// nothing.
pub struct GameController<P: Presenter> {
    engine: GameEngine,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    /// Create a controller around a fresh, idle engine.
    pub fn new(presenter: P) -> Self {
        Self::with_engine(GameEngine::new(), presenter)
    }

    pub fn with_engine(engine: GameEngine, presenter: P) -> Self {
        Self { engine, presenter }
    }

    /// Start a new game and draw the empty board.
    pub fn start(&mut self, name1: impl Into<String>, name2: impl Into<String>) {
        self.engine.start(name1, name2);
        self.render();
    }

    /// Play `index` for the current player.
    pub fn play(&mut self, index: usize) -> Result<MoveResult, BoardError> {
        let result = self.engine.play(index)?;
        match result {
            MoveResult::Placed => self.render(),
            MoveResult::Won | MoveResult::Tie => {
                self.render();
                if let Some(message) = self.engine.result_message() {
                    trace!("notify result: {}", message);
                    self.presenter.display_result(&message);
                }
            }
            MoveResult::Rejected(_) => {}
        }
        Ok(result)
    }

    /// Clear the board, go idle and draw the empty board.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.render();
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the controller, returning its parts.
    pub fn into_parts(self) -> (GameEngine, P) {
        (self.engine, self.presenter)
    }

    fn render(&mut self) {
        let board = self.engine.board();
        trace!("notify render");
        self.presenter.render(&board);
    }
}
