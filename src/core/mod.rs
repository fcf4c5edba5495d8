//! Core types: configuration, secret sources, errors.
//!
//! Everything here is independent of how the game is presented.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Configuration, ConfigurationBuilder, DEFAULT_ATTEMPTS, DEFAULT_MAX, DEFAULT_MIN};
pub use error::{AttemptError, ConfigError};
pub use rng::{DrawRng, FixedSecret, SecretSource};
