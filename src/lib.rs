//! # draw-number
//!
//! A number-guessing game: a model hides a number in a configured range, the
//! player has a limited number of attempts, and any number of views show the
//! outcome of each guess.
//!
//! ## Architecture
//!
//! - **Model**: `DrawNumber` owns the secret and the attempt budget. It
//!   knows nothing about presentation.
//!
//! - **Views**: anything implementing `DrawNumberView`. Interactive views
//!   forward user commands to a `DrawNumberViewObserver`.
//!
//! - **Coordinator**: `DrawNumberApp` reads the configuration file, owns the
//!   model and the views, and routes events both ways.
//!
//! ## Modules
//!
//! - `core`: Configuration, secret sources, errors
//! - `model`: The guessing model and attempt results
//! - `view`: View contract, console and log views
//! - `app`: Coordinator, config parsing, lifecycle

pub mod core;
pub mod model;
pub mod view;
pub mod app;

// Re-export commonly used types
pub use crate::core::{
    Configuration, ConfigurationBuilder,
    ConfigError, AttemptError,
    DrawRng, FixedSecret, SecretSource,
};

pub use crate::model::{DrawNumber, DrawNumberImpl, DrawResult, Outcome};

pub use crate::view::{ConsoleView, DrawNumberView, DrawNumberViewObserver, PrintStreamView};

pub use crate::app::{DrawNumberApp, Lifecycle, LifecycleState};
