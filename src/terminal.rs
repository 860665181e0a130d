#![cfg(feature = "std")]

//! Terminal front end: draws the board to a writer and turns typed
//! commands into game actions.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::{
    board::BoardState,
    common::{MoveResult, Rejection},
    config::{BOARD_CELLS, DEFAULT_PLAYER_NAMES, SEAT_MARKERS},
    controller::GameController,
    presenter::Presenter,
};

const HELP: &str = "\
Commands:
  1-9     place your marker on that cell
  new     enter names and start a new game
  reset   clear the board
  help    show this message
  quit    leave the game";

/// [`Presenter`] that writes the board and results as plain text.
///
/// The trait is infallible, so the first I/O error is held until
/// [`take_error`](Self::take_error) is called.
pub struct TerminalPresenter<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    /// Writer the board is drawn to, for prompts and hints.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn record(&mut self, res: io::Result<()>) {
        if let Err(e) = res {
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, board: &BoardState) {
        let res = write!(self.out, "\n{}", board).and_then(|()| self.out.flush());
        self.record(res);
    }

    fn display_result(&mut self, message: &str) {
        let res = writeln!(self.out, "\n{}", message).and_then(|()| self.out.flush());
        self.record(res);
    }
}

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a marker; holds the 0-based cell index.
    Move(usize),
    Start,
    Reset,
    Help,
    Quit,
}

/// Input that is not a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown command `{}` (type `help`)", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Cells are typed 1-based, as drawn on the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<usize>() {
            return match n.checked_sub(1) {
                Some(index) => Ok(Command::Move(index)),
                None => Err(UnknownCommand(s.to_string())),
            };
        }
        match s.to_ascii_lowercase().as_str() {
            "new" | "start" => Ok(Command::Start),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(UnknownCommand(s.to_string())),
        }
    }
}

/// Name typed for `seat` (0 or 1), or the placeholder when left blank.
pub fn name_or_default(input: &str, seat: usize) -> String {
    let name = input.trim();
    if name.is_empty() {
        DEFAULT_PLAYER_NAMES[seat].to_string()
    } else {
        name.to_string()
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Ask for both names. `None` if input ends first.
fn prompt_names<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(String, String)>> {
    let Some(first) = prompt_name(input, out, 0)? else {
        return Ok(None);
    };
    let Some(second) = prompt_name(input, out, 1)? else {
        return Ok(None);
    };
    Ok(Some((first, second)))
}

fn prompt_name<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    seat: usize,
) -> io::Result<Option<String>> {
    write!(
        out,
        "{} name ({}) [{}]: ",
        DEFAULT_PLAYER_NAMES[seat], SEAT_MARKERS[seat], DEFAULT_PLAYER_NAMES[seat]
    )?;
    out.flush()?;
    Ok(read_line(input)?.map(|line| name_or_default(&line, seat)))
}

fn announce_turn<W: Write>(
    controller: &mut GameController<TerminalPresenter<W>>,
) -> io::Result<()> {
    let turn = controller
        .engine()
        .current_player()
        .map(|p| format!("{}'s turn ({})", p.name(), p.marker()));
    if let Some(turn) = turn {
        writeln!(controller.presenter_mut().out(), "{}", turn)?;
    }
    Ok(())
}

fn check_output<W: Write>(
    controller: &mut GameController<TerminalPresenter<W>>,
) -> io::Result<()> {
    match controller.presenter_mut().take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Play on a text terminal until `quit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R, output: W) -> anyhow::Result<()> {
    let mut controller = GameController::new(TerminalPresenter::new(output));
    writeln!(controller.presenter_mut().out(), "Tic-tac-toe. Type `help` for commands.")?;

    let Some((p1, p2)) = prompt_names(&mut input, controller.presenter_mut().out())? else {
        return Ok(());
    };
    controller.start(p1, p2);
    check_output(&mut controller)?;
    announce_turn(&mut controller)?;

    loop {
        {
            let out = controller.presenter_mut().out();
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(controller.presenter_mut().out(), "{}", e)?;
                continue;
            }
        };
        debug!("command: {:?}", command);

        match command {
            Command::Move(index) => match controller.play(index) {
                Ok(MoveResult::Placed) => announce_turn(&mut controller)?,
                Ok(MoveResult::Won) | Ok(MoveResult::Tie) => {
                    writeln!(
                        controller.presenter_mut().out(),
                        "Type `new` to play again or `quit` to leave."
                    )?;
                }
                Ok(MoveResult::Rejected(Rejection::Occupied)) => {
                    writeln!(
                        controller.presenter_mut().out(),
                        "Cell {} is already taken.",
                        index + 1
                    )?;
                }
                Ok(MoveResult::Rejected(Rejection::Inactive)) => {
                    writeln!(
                        controller.presenter_mut().out(),
                        "No game in progress. Type `new` to start one."
                    )?;
                }
                Err(e) => {
                    debug!("move rejected: {}", e);
                    writeln!(
                        controller.presenter_mut().out(),
                        "There is no cell {}; cells are numbered 1-{}.",
                        index + 1,
                        BOARD_CELLS
                    )?;
                }
            },
            Command::Start => {
                let Some((p1, p2)) = prompt_names(&mut input, controller.presenter_mut().out())?
                else {
                    break;
                };
                controller.start(p1, p2);
                check_output(&mut controller)?;
                announce_turn(&mut controller)?;
            }
            Command::Reset => {
                controller.reset();
                writeln!(
                    controller.presenter_mut().out(),
                    "Board cleared. Type `new` to start a game."
                )?;
            }
            Command::Help => writeln!(controller.presenter_mut().out(), "{}", HELP)?,
            Command::Quit => break,
        }
        check_output(&mut controller)?;
    }
    Ok(())
}
