//! Passive view that logs every event as a line of text.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::model::DrawResult;

use super::{DrawNumberView, DrawNumberViewObserver};

/// Line written when a guess is rejected.
pub const INCORRECT_NUMBER_LINE: &str = "Incorrect number... try again";

/// Writes one line per game event to a stream.
///
/// Never produces guesses; `start` does nothing.
pub struct PrintStreamView {
    out: Box<dyn Write + Send>,
    observer: Option<Arc<dyn DrawNumberViewObserver>>,
}

impl PrintStreamView {
    /// Log to an arbitrary writer.
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Box::new(out),
            observer: None,
        }
    }

    /// Log to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Log to a file, creating or truncating it.
    #[instrument]
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        debug!("Opened log view file");
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Whether an observer has been attached.
    #[must_use]
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    fn write_line(&mut self, line: &str) {
        let written = writeln!(self.out, "{line}").and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!(error = %e, "Failed to write view line");
        }
    }
}

impl DrawNumberView for PrintStreamView {
    fn set_observer(&mut self, observer: Arc<dyn DrawNumberViewObserver>) {
        self.observer = Some(observer);
    }

    fn start(&mut self) {}

    fn result(&mut self, result: &DrawResult) {
        let line = format!(
            "{} ({} attempts left)",
            result.description(),
            result.remaining_attempts
        );
        self.write_line(&line);
    }

    fn number_incorrect(&mut self) {
        self.write_line(INCORRECT_NUMBER_LINE);
    }

    fn display_error(&mut self, message: &str) {
        self.write_line(&format!("Error: {message}"));
    }
}

impl std::fmt::Debug for PrintStreamView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrintStreamView")
            .field("has_observer", &self.has_observer())
            .finish_non_exhaustive()
    }
}
