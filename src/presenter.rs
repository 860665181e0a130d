//! Notification seam between the game and whatever draws it.

use crate::board::BoardState;
use alloc::{string::String, vec::Vec};

/// Receives the notifications a [`GameController`](crate::GameController)
/// emits after each state change.
pub trait Presenter {
    /// Draw the board.
    fn render(&mut self, board: &BoardState);

    /// Show the final result, e.g. `"Alice wins!"`.
    fn display_result(&mut self, message: &str);
}

/// A single notification, as recorded by [`NotificationLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    Render(BoardState),
    Result(String),
}

/// Presenter that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct NotificationLog {
    pub events: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent result message, if any.
    pub fn last_result(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|n| match n {
            Notification::Result(msg) => Some(msg.as_str()),
            Notification::Render(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for NotificationLog {
    fn render(&mut self, board: &BoardState) {
        self.events.push(Notification::Render(*board));
    }

    fn display_result(&mut self, message: &str) {
        self.events.push(Notification::Result(String::from(message)));
    }
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render(&mut self, board: &BoardState) {
        (**self).render(board);
    }

    fn display_result(&mut self, message: &str) {
        (**self).display_result(message);
    }
}
