//! Configuration text parsing.
//!
//! One setting per line, `name: value`, where any run of `:` and whitespace
//! separates the tokens. A name is recognised when it *contains* one of the
//! setting keys, checked in order: `minimum`, `maximum`, `attempts`. So
//! `minimum-value: 5` sets the minimum. Other lines are ignored.
//!
//! A malformed value stops parsing at that line. Settings read before it
//! are kept.

use crate::core::{ConfigError, ConfigurationBuilder};

/// Recognised settings, in matching order.
const SETTINGS: [Setting; 3] = [Setting::Min, Setting::Max, Setting::Attempts];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Setting {
    Min,
    Max,
    Attempts,
}

impl Setting {
    const fn key(self) -> &'static str {
        match self {
            Setting::Min => "minimum",
            Setting::Max => "maximum",
            Setting::Attempts => "attempts",
        }
    }

    fn apply(self, builder: ConfigurationBuilder, value: i32) -> ConfigurationBuilder {
        match self {
            Setting::Min => builder.with_min(value),
            Setting::Max => builder.with_max(value),
            Setting::Attempts => builder.with_attempts(value),
        }
    }
}

/// Settings accumulated from configuration text.
#[derive(Debug)]
pub struct ParsedConfiguration {
    /// Everything read up to the end of input or the first bad line.
    pub builder: ConfigurationBuilder,
    /// The error that stopped parsing, if any.
    pub error: Option<ConfigError>,
}

/// Parse configuration text into a builder.
pub fn parse_configuration(text: &str) -> ParsedConfiguration {
    let mut builder = ConfigurationBuilder::new();

    for line in text.lines() {
        let mut tokens = line
            .split(|c: char| c == ':' || c.is_whitespace())
            .filter(|token| !token.is_empty());

        let Some(name) = tokens.next() else {
            continue;
        };
        let Some(setting) = SETTINGS.into_iter().find(|s| name.contains(s.key())) else {
            continue;
        };

        let value = tokens.next().unwrap_or_default();
        match value.parse::<i32>() {
            Ok(parsed) => builder = setting.apply(builder, parsed),
            Err(source) => {
                return ParsedConfiguration {
                    builder,
                    error: Some(ConfigError::Parse {
                        key: setting.key(),
                        value: value.to_string(),
                        source,
                    }),
                };
            }
        }
    }

    ParsedConfiguration { builder, error: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_ATTEMPTS, DEFAULT_MAX, DEFAULT_MIN};

    #[test]
    fn test_parse_full_file() {
        let parsed = parse_configuration("minimum: 1\nmaximum: 10\nattempts: 2\n");
        assert!(parsed.error.is_none());

        let config = parsed.builder.build();
        assert_eq!(config.min(), 1);
        assert_eq!(config.max(), 10);
        assert_eq!(config.attempts(), 2);
    }

    #[test]
    fn test_separators_are_permissive() {
        let parsed = parse_configuration("minimum 3\nmaximum::  30\n  attempts\t:\t4");
        let config = parsed.builder.build();
        assert_eq!((config.min(), config.max(), config.attempts()), (3, 30, 4));
    }

    #[test]
    fn test_keys_match_by_containment() {
        let parsed = parse_configuration("minimum-value: 5\nthe-maximum: 50\nmax-attempts: 7");
        let config = parsed.builder.build();
        assert_eq!((config.min(), config.max(), config.attempts()), (5, 50, 7));
    }

    #[test]
    fn test_first_matching_key_wins() {
        // Contains both "minimum" and "maximum"; minimum is checked first.
        let parsed = parse_configuration("minimum_not_maximum: 4");
        let config = parsed.builder.build();
        assert_eq!(config.min(), 4);
        assert_eq!(config.max(), DEFAULT_MAX);
    }

    #[test]
    fn test_unknown_and_blank_lines_ignored() {
        let parsed = parse_configuration("\n# comment\ncolour: blue\n\nmaximum: 20\n");
        assert!(parsed.error.is_none());

        let config = parsed.builder.build();
        assert_eq!(config.min(), DEFAULT_MIN);
        assert_eq!(config.max(), 20);
        assert_eq!(config.attempts(), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn test_order_is_irrelevant() {
        let a = parse_configuration("attempts: 3\nmaximum: 9\nminimum: 2").builder.build();
        let b = parse_configuration("minimum: 2\nmaximum: 9\nattempts: 3").builder.build();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bad_value_stops_parsing() {
        let parsed = parse_configuration("minimum: 1\nmaximum: ten\nattempts: 3");

        let Some(ConfigError::Parse { key, value, .. }) = &parsed.error else {
            panic!("expected parse error, got {:?}", parsed.error);
        };
        assert_eq!(*key, "maximum");
        assert_eq!(value, "ten");

        // Kept the minimum, never reached attempts
        let config = parsed.builder.build();
        assert_eq!(config.min(), 1);
        assert_eq!(config.max(), DEFAULT_MAX);
        assert_eq!(config.attempts(), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn test_missing_value_is_parse_error() {
        let parsed = parse_configuration("attempts:");
        assert!(matches!(
            parsed.error,
            Some(ConfigError::Parse { key: "attempts", .. })
        ));
    }

    #[test]
    fn test_negative_values() {
        let config = parse_configuration("minimum: -5\nmaximum: -1").builder.build();
        assert_eq!(config.min(), -5);
        assert_eq!(config.max(), -1);
        assert!(config.is_consistent());
    }
}
