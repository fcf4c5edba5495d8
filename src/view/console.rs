//! Interactive console view.
//!
//! Reads commands line by line on its own thread and renders events to a
//! shared writer. Recognised input:
//! - an integer: submit a guess
//! - `reset`: start a new round
//! - `quit`, or end of input: leave the game

use std::io::{self, BufRead, BufReader, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::{debug, info, instrument, warn};

use crate::model::DrawResult;

use super::print_stream::INCORRECT_NUMBER_LINE;
use super::{DrawNumberView, DrawNumberViewObserver};

type SharedOut = Arc<Mutex<Box<dyn Write + Send>>>;

/// A parsed line of console input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Submit a guess.
    Guess(i32),
    /// Start a new round.
    Reset,
    /// Leave the game.
    Quit,
    /// Blank line.
    Empty,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Interpret one line of input.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if let Ok(guess) = trimmed.parse::<i32>() {
            return Self::Guess(guess);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "reset" => Self::Reset,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

/// Interactive view driven by a line-oriented reader.
pub struct ConsoleView {
    input: Option<Box<dyn BufRead + Send>>,
    out: SharedOut,
    observer: Option<Arc<dyn DrawNumberViewObserver>>,
    input_thread: Option<JoinHandle<()>>,
}

impl ConsoleView {
    /// Console view on standard input and output.
    pub fn new() -> Self {
        Self::with_io(BufReader::new(io::stdin()), io::stdout())
    }

    /// Console view on arbitrary streams.
    pub fn with_io(
        input: impl BufRead + Send + 'static,
        out: impl Write + Send + 'static,
    ) -> Self {
        Self {
            input: Some(Box::new(input)),
            out: Arc::new(Mutex::new(Box::new(out))),
            observer: None,
            input_thread: None,
        }
    }

    /// Wait for the input loop to finish.
    ///
    /// Only returns once the reader hits end of input or a `quit` line, so
    /// do not call this on a view reading from a terminal.
    pub fn join(&mut self) {
        if let Some(handle) = self.input_thread.take() {
            if handle.join().is_err() {
                warn!("Console input thread panicked");
            }
        }
    }

    fn write_line(&self, line: &str) {
        write_line(&self.out, line);
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

fn write_line(out: &SharedOut, line: &str) {
    let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
    let written = writeln!(out, "{line}").and_then(|()| out.flush());
    if let Err(e) = written {
        warn!(error = %e, "Failed to write console line");
    }
}

#[instrument(skip_all)]
fn input_loop(
    input: Box<dyn BufRead + Send>,
    out: SharedOut,
    observer: Arc<dyn DrawNumberViewObserver>,
) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Console input failed");
                break;
            }
        };

        match Command::parse(&line) {
            Command::Guess(guess) => observer.new_attempt(guess),
            Command::Reset => {
                observer.reset_game();
                write_line(&out, "New round started");
            }
            Command::Quit => {
                observer.quit();
                return;
            }
            Command::Empty => {}
            Command::Unknown(text) => {
                debug!(input = %text, "Unrecognised console input");
                write_line(&out, "Type a number, 'reset' or 'quit'");
            }
        }
    }

    info!("Console input closed");
    observer.quit();
}

impl DrawNumberView for ConsoleView {
    fn set_observer(&mut self, observer: Arc<dyn DrawNumberViewObserver>) {
        self.observer = Some(observer);
    }

    fn start(&mut self) {
        let Some(observer) = self.observer.clone() else {
            warn!("Console view started without an observer");
            return;
        };
        let Some(input) = self.input.take() else {
            warn!("Console view already started");
            return;
        };

        self.write_line("Guess the number! Type 'reset' for a new round or 'quit' to leave.");
        let out = Arc::clone(&self.out);
        self.input_thread = Some(thread::spawn(move || input_loop(input, out, observer)));
    }

    fn result(&mut self, result: &DrawResult) {
        self.write_line(&format!(
            "{} ({} attempts left)",
            result.description(),
            result.remaining_attempts
        ));
        if result.is_won() || result.lost {
            self.write_line("Type 'reset' to play again");
        }
    }

    fn number_incorrect(&mut self) {
        self.write_line(INCORRECT_NUMBER_LINE);
    }

    fn display_error(&mut self, message: &str) {
        self.write_line(&format!("Error: {message}"));
    }
}

impl std::fmt::Debug for ConsoleView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleView")
            .field("started", &self.input.is_none())
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}
