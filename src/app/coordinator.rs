//! The coordinator binding one model to any number of views.
//!
//! ## Event flow
//!
//! - Views call [`DrawNumberViewObserver`] methods on the app
//! - The app forwards guesses to the model and broadcasts the outcome to
//!   every view, in registration order
//! - Rejected guesses become `number_incorrect` notifications; they never
//!   propagate as errors
//!
//! Model and views sit behind one mutex, so calls from a console input
//! thread and from the caller's thread are serialised.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tracing::{debug, info, instrument, warn};

use crate::core::{ConfigError, Configuration, DrawRng, SecretSource};
use crate::model::{DrawNumber, DrawNumberImpl};
use crate::view::{DrawNumberView, DrawNumberViewObserver};

use super::lifecycle::{Lifecycle, LifecycleState};
use super::parse::parse_configuration;

struct Inner {
    model: Box<dyn DrawNumber>,
    views: Vec<Box<dyn DrawNumberView>>,
}

impl Inner {
    fn display_error(&mut self, message: &str) {
        for view in &mut self.views {
            view.display_error(message);
        }
    }
}

struct Shared {
    inner: Mutex<Inner>,
    lifecycle: Lifecycle,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn new_attempt(&self, guess: i32) {
        let mut inner = self.lock();
        let attempt = inner.model.attempt(guess);
        match attempt {
            Ok(result) => {
                debug!(
                    guess,
                    outcome = ?result.outcome,
                    remaining = result.remaining_attempts,
                    "Attempt evaluated"
                );
                for view in &mut inner.views {
                    view.result(&result);
                }
            }
            Err(e) => {
                debug!(guess, error = %e, "Attempt rejected");
                for view in &mut inner.views {
                    view.number_incorrect();
                }
            }
        }
    }

    fn reset_game(&self) {
        self.lock().model.reset();
        debug!("New round");
    }

    fn quit(&self) {
        if self.lifecycle.request_stop() {
            info!("Quit requested");
        }
    }
}

/// Handle that views hold; does not keep the app alive.
struct AppObserver(Weak<Shared>);

impl DrawNumberViewObserver for AppObserver {
    fn new_attempt(&self, guess: i32) {
        if let Some(shared) = self.0.upgrade() {
            shared.new_attempt(guess);
        }
    }

    fn reset_game(&self) {
        if let Some(shared) = self.0.upgrade() {
            shared.reset_game();
        }
    }

    fn quit(&self) {
        if let Some(shared) = self.0.upgrade() {
            shared.quit();
        }
    }
}

/// The number-guessing application.
///
/// Cloning is cheap; clones share the same model, views and lifecycle.
#[derive(Clone)]
pub struct DrawNumberApp {
    shared: Arc<Shared>,
}

impl DrawNumberApp {
    /// Load the configuration file at `path` and start the views.
    ///
    /// Fails with [`ConfigError::NotFound`] if the file cannot be opened; in
    /// that case no view is touched. Every other configuration problem is
    /// reported to the views and the game starts anyway.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), views = views.len()))]
    pub fn new(
        path: impl AsRef<Path>,
        views: Vec<Box<dyn DrawNumberView>>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::NotFound {
            path: path.display().to_string(),
            source,
        })?;

        // Bytes that are not UTF-8 are replaced, not fatal
        let mut bytes = Vec::new();
        let read_error = BufReader::new(file)
            .read_to_end(&mut bytes)
            .err()
            .map(|source| ConfigError::Read { source });
        let text = String::from_utf8_lossy(&bytes);

        Self::assemble(&text, read_error, views, DrawRng::from_entropy())
    }

    /// Build the app from configuration text already in memory.
    ///
    /// Same behavior as [`DrawNumberApp::new`] after the file has been read,
    /// with the secret drawn from `source`.
    pub fn from_source(
        text: &str,
        views: Vec<Box<dyn DrawNumberView>>,
        source: impl SecretSource + 'static,
    ) -> Result<Self, ConfigError> {
        Self::assemble(text, None, views, source)
    }

    fn assemble(
        text: &str,
        read_error: Option<ConfigError>,
        views: Vec<Box<dyn DrawNumberView>>,
        source: impl SecretSource + 'static,
    ) -> Result<Self, ConfigError> {
        let parsed = parse_configuration(text);

        // Parsing stops at the first bad line, before a later read failure
        let mut errors: Vec<ConfigError> = parsed.error.or(read_error).into_iter().collect();

        let mut config = parsed.builder.build();
        if !config.is_consistent() {
            warn!(?config, "Configuration is not consistent, using defaults");
            errors.push(ConfigError::Inconsistent);
            config = Configuration::default();
        }

        let model = DrawNumberImpl::new(config, source)?;
        info!(
            min = config.min(),
            max = config.max(),
            attempts = config.attempts(),
            "Game configured"
        );

        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner {
                model: Box::new(model),
                views,
            }),
            lifecycle: Lifecycle::new(),
        });

        let observer: Arc<dyn DrawNumberViewObserver> =
            Arc::new(AppObserver(Arc::downgrade(&shared)));
        {
            let mut inner = shared.lock();
            for view in &mut inner.views {
                view.set_observer(Arc::clone(&observer));
            }
            for error in &errors {
                warn!(error = %error, "Configuration problem");
                inner.display_error(&error.to_string());
            }
            for view in &mut inner.views {
                view.start();
            }
        }

        Ok(Self { shared })
    }

    /// Block until a view asks to quit, then release the views.
    ///
    /// Dropping the views closes their output streams (log files flush
    /// here). Afterwards the lifecycle is `Stopped`.
    #[instrument(skip(self))]
    pub fn wait(&self) {
        self.shared.lifecycle.wait_for_stop();

        let views = std::mem::take(&mut self.shared.lock().views);
        debug!(views = views.len(), "Releasing views");
        drop(views);

        self.shared.lifecycle.mark_stopped();
        info!("Application stopped");
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.shared.lifecycle.state()
    }

    /// Attempts left in the current round.
    #[must_use]
    pub fn remaining_attempts(&self) -> i32 {
        self.shared.lock().model.remaining_attempts()
    }

    /// Configuration the model is running with.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        *self.shared.lock().model.configuration()
    }
}

impl DrawNumberViewObserver for DrawNumberApp {
    #[instrument(skip(self))]
    fn new_attempt(&self, guess: i32) {
        self.shared.new_attempt(guess);
    }

    #[instrument(skip(self))]
    fn reset_game(&self) {
        self.shared.reset_game();
    }

    #[instrument(skip(self))]
    fn quit(&self) {
        self.shared.quit();
    }
}

impl std::fmt::Debug for DrawNumberApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawNumberApp")
            .field("lifecycle", &self.lifecycle_state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSecret;
    use crate::model::DrawResult;

    #[derive(Default)]
    struct CountingView {
        results: Arc<Mutex<Vec<DrawResult>>>,
        incorrect: Arc<Mutex<usize>>,
    }

    impl DrawNumberView for CountingView {
        fn set_observer(&mut self, _observer: Arc<dyn DrawNumberViewObserver>) {}
        fn start(&mut self) {}
        fn result(&mut self, result: &DrawResult) {
            self.results.lock().unwrap().push(*result);
        }
        fn number_incorrect(&mut self) {
            *self.incorrect.lock().unwrap() += 1;
        }
        fn display_error(&mut self, _message: &str) {}
    }

    #[test]
    fn test_errors_are_absorbed() {
        let view = CountingView::default();
        let incorrect = Arc::clone(&view.incorrect);
        let app = DrawNumberApp::from_source(
            "minimum: 1\nmaximum: 10\nattempts: 1",
            vec![Box::new(view)],
            FixedSecret(5),
        )
        .unwrap();

        app.new_attempt(42);
        app.new_attempt(3);
        app.new_attempt(5);

        // Out of range, then accepted, then out of budget
        assert_eq!(*incorrect.lock().unwrap(), 2);
        assert_eq!(app.remaining_attempts(), 0);
    }

    #[test]
    fn test_observer_outliving_app_is_inert() {
        let observer = {
            let app = DrawNumberApp::from_source("", Vec::new(), FixedSecret(1)).unwrap();
            AppObserver(Arc::downgrade(&app.shared))
        };

        observer.new_attempt(1);
        observer.reset_game();
        observer.quit();
    }

    #[test]
    fn test_clones_share_state() {
        let app = DrawNumberApp::from_source("attempts: 4", Vec::new(), FixedSecret(50)).unwrap();
        let other = app.clone();

        other.new_attempt(10);
        assert_eq!(app.remaining_attempts(), 3);

        other.quit();
        assert_eq!(app.lifecycle_state(), LifecycleState::Stopping);
    }
}
