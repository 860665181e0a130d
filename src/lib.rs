#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod controller;
mod game;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
pub mod presenter;
pub mod rules;
#[cfg(feature = "std")]
pub mod terminal;

pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env, LOG_ENV_VAR};
pub use player::*;
pub use presenter::{Notification, NotificationLog, Presenter};
#[cfg(feature = "std")]
pub use terminal::{name_or_default, run_interactive, Command, TerminalPresenter};
