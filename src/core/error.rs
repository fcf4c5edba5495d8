//! Error types.

use derive_more::{Display, Error};

/// Failures while loading or validating the game configuration.
///
/// Only [`ConfigError::NotFound`] is fatal. The other kinds are reported to
/// the views and the game carries on with whatever configuration it has.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened.
    #[display("configuration file {path} could not be opened: {source}")]
    NotFound {
        /// Path that was tried.
        path: String,
        /// Underlying open failure.
        source: std::io::Error,
    },

    /// The file was opened but reading it failed.
    #[display("configuration could not be read: {source}")]
    Read {
        /// Underlying read failure.
        source: std::io::Error,
    },

    /// A recognised key carried a value that is not an integer.
    #[display("invalid value {value:?} for {key}: {source}")]
    Parse {
        /// Which setting was being parsed.
        key: &'static str,
        /// Raw value text (empty when the line had no value).
        value: String,
        /// Integer parse failure.
        source: std::num::ParseIntError,
    },

    /// The built configuration has an empty range or no attempts.
    #[display("Configuration is not consistent")]
    Inconsistent,
}

/// A guess the model refused to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum AttemptError {
    /// The round's attempt budget is used up.
    #[display("no attempts left")]
    NoAttemptsLeft,

    /// The guess lies outside the configured range.
    #[display("{guess} is outside [{min}, {max}]")]
    OutOfRange {
        /// The rejected guess.
        guess: i32,
        /// Lower bound, inclusive.
        min: i32,
        /// Upper bound, inclusive.
        max: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_inconsistent_message() {
        assert_eq!(
            ConfigError::Inconsistent.to_string(),
            "Configuration is not consistent"
        );
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = ConfigError::Parse {
            key: "minimum",
            value: "abc".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("invalid value \"abc\" for minimum"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_attempt_error_display() {
        assert_eq!(AttemptError::NoAttemptsLeft.to_string(), "no attempts left");
        assert_eq!(
            AttemptError::OutOfRange { guess: 11, min: 1, max: 10 }.to_string(),
            "11 is outside [1, 10]"
        );
    }
}
