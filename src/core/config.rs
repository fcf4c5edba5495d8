//! Game configuration.
//!
//! A [`Configuration`] is built once through [`ConfigurationBuilder`] and is
//! immutable afterwards. The builder never validates: callers check
//! [`Configuration::is_consistent`] and decide what to do about it.

use serde::{Deserialize, Serialize};

/// Lower bound used when none is configured.
pub const DEFAULT_MIN: i32 = 0;
/// Upper bound used when none is configured.
pub const DEFAULT_MAX: i32 = 100;
/// Attempt budget used when none is configured.
pub const DEFAULT_ATTEMPTS: i32 = 10;

/// Range and attempt budget for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    min: i32,
    max: i32,
    attempts: i32,
}

impl Configuration {
    /// Start building a configuration.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Lower bound of the secret, inclusive.
    #[must_use]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound of the secret, inclusive.
    #[must_use]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Guesses allowed per round.
    #[must_use]
    pub const fn attempts(&self) -> i32 {
        self.attempts
    }

    /// True iff `min < max` and `attempts > 0`.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.min < self.max && self.attempts > 0
    }
}

impl Default for Configuration {
    fn default() -> Self {
        ConfigurationBuilder::new().build()
    }
}

/// Accumulates configuration values; unset fields fall back to defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConfigurationBuilder {
    min: Option<i32>,
    max: Option<i32>,
    attempts: Option<i32>,
}

impl ConfigurationBuilder {
    /// Create a builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lower bound. Later calls overwrite earlier ones.
    #[must_use]
    pub fn with_min(mut self, min: i32) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub fn with_max(mut self, max: i32) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the attempt budget.
    #[must_use]
    pub fn with_attempts(mut self, attempts: i32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    /// Build the configuration. Does not check consistency.
    #[must_use]
    pub fn build(self) -> Configuration {
        Configuration {
            min: self.min.unwrap_or(DEFAULT_MIN),
            max: self.max.unwrap_or(DEFAULT_MAX),
            attempts: self.attempts.unwrap_or(DEFAULT_ATTEMPTS),
        }
    }
}
