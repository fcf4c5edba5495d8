//! The guessing model.
//!
//! `DrawNumber` is the seam the coordinator talks to; `DrawNumberImpl` is the
//! only implementation. It is a counter plus a hidden value:
//! - `attempt` checks the budget and the range, spends one attempt, compares
//! - `reset` draws a new secret and restores the budget
//!
//! There is no won state. After a correct guess the round keeps accepting
//! attempts until the budget runs out or the round is reset.

use crate::core::{AttemptError, ConfigError, Configuration, DrawRng, SecretSource};

use super::{DrawResult, Outcome};

/// Model of a number-guessing round.
pub trait DrawNumber: Send {
    /// Evaluate a guess.
    ///
    /// Fails without touching any state when no attempts are left or the
    /// guess is outside the configured range.
    fn attempt(&mut self, guess: i32) -> Result<DrawResult, AttemptError>;

    /// Start a new round: fresh secret, full budget.
    fn reset(&mut self);

    /// Attempts left in the current round.
    fn remaining_attempts(&self) -> i32;

    /// Configuration the model was built from.
    fn configuration(&self) -> &Configuration;
}

/// Standard model, drawing secrets from a [`SecretSource`].
pub struct DrawNumberImpl {
    config: Configuration,
    source: Box<dyn SecretSource>,
    secret: i32,
    remaining: i32,
}

impl DrawNumberImpl {
    /// Create a model and draw the first secret.
    ///
    /// Returns [`ConfigError::Inconsistent`] when the configuration has an
    /// empty range or no attempts, since no round could be played.
    pub fn new(
        config: Configuration,
        source: impl SecretSource + 'static,
    ) -> Result<Self, ConfigError> {
        if !config.is_consistent() {
            return Err(ConfigError::Inconsistent);
        }

        let mut source: Box<dyn SecretSource> = Box::new(source);
        let secret = source.draw(config.min(), config.max());
        Ok(Self {
            config,
            source,
            secret,
            remaining: config.attempts(),
        })
    }

    /// Model with a deterministic secret sequence.
    pub fn with_seed(config: Configuration, seed: u64) -> Result<Self, ConfigError> {
        Self::new(config, DrawRng::new(seed))
    }
}

impl DrawNumber for DrawNumberImpl {
    fn attempt(&mut self, guess: i32) -> Result<DrawResult, AttemptError> {
        if self.remaining <= 0 {
            return Err(AttemptError::NoAttemptsLeft);
        }
        if guess < self.config.min() || guess > self.config.max() {
            return Err(AttemptError::OutOfRange {
                guess,
                min: self.config.min(),
                max: self.config.max(),
            });
        }

        self.remaining -= 1;
        let outcome = match guess.cmp(&self.secret) {
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Greater => Outcome::TooHigh,
            std::cmp::Ordering::Equal => Outcome::Correct,
        };
        Ok(DrawResult::new(outcome, self.remaining))
    }

    fn reset(&mut self) {
        self.secret = self.source.draw(self.config.min(), self.config.max());
        self.remaining = self.config.attempts();
    }

    fn remaining_attempts(&self) -> i32 {
        self.remaining
    }

    fn configuration(&self) -> &Configuration {
        &self.config
    }
}

impl std::fmt::Debug for DrawNumberImpl {
    // Secret left out on purpose
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawNumberImpl")
            .field("config", &self.config)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedSecret;

    fn one_to_ten(attempts: i32) -> Configuration {
        Configuration::builder()
            .with_min(1)
            .with_max(10)
            .with_attempts(attempts)
            .build()
    }

    #[test]
    fn test_new_rejects_inconsistent() {
        let config = Configuration::builder().with_min(10).with_max(1).build();
        let err = DrawNumberImpl::new(config, FixedSecret(5)).unwrap_err();
        assert!(matches!(err, ConfigError::Inconsistent));
    }

    #[test]
    fn test_comparisons() {
        let mut model = DrawNumberImpl::new(one_to_ten(5), FixedSecret(5)).unwrap();

        assert_eq!(model.attempt(2).unwrap().outcome, Outcome::TooLow);
        assert_eq!(model.attempt(9).unwrap().outcome, Outcome::TooHigh);
        assert_eq!(model.attempt(5).unwrap().outcome, Outcome::Correct);
        assert_eq!(model.remaining_attempts(), 2);
    }

    #[test]
    fn test_out_of_range_spends_nothing() {
        let mut model = DrawNumberImpl::new(one_to_ten(3), FixedSecret(5)).unwrap();

        assert_eq!(
            model.attempt(0),
            Err(AttemptError::OutOfRange { guess: 0, min: 1, max: 10 })
        );
        assert_eq!(
            model.attempt(11),
            Err(AttemptError::OutOfRange { guess: 11, min: 1, max: 10 })
        );
        assert_eq!(model.remaining_attempts(), 3);
    }

    #[test]
    fn test_bounds_are_valid_guesses() {
        let mut model = DrawNumberImpl::new(one_to_ten(3), FixedSecret(5)).unwrap();
        assert!(model.attempt(1).is_ok());
        assert!(model.attempt(10).is_ok());
    }

    #[test]
    fn test_budget_runs_out() {
        let mut model = DrawNumberImpl::new(one_to_ten(1), FixedSecret(5)).unwrap();

        let last = model.attempt(4).unwrap();
        assert!(last.lost);
        assert_eq!(last.remaining_attempts, 0);

        assert_eq!(model.attempt(5), Err(AttemptError::NoAttemptsLeft));
        assert_eq!(model.remaining_attempts(), 0);
    }

    #[test]
    fn test_no_lockout_after_win() {
        let mut model = DrawNumberImpl::new(one_to_ten(3), FixedSecret(5)).unwrap();

        assert!(model.attempt(5).unwrap().is_won());
        assert!(model.attempt(5).unwrap().is_won());
        assert_eq!(model.remaining_attempts(), 1);
    }

    #[test]
    fn test_reset_restores_budget() {
        let mut model = DrawNumberImpl::new(one_to_ten(2), FixedSecret(5)).unwrap();
        model.attempt(1).unwrap();
        model.attempt(2).unwrap();
        assert_eq!(model.remaining_attempts(), 0);

        model.reset();
        assert_eq!(model.remaining_attempts(), 2);
        assert_eq!(model.attempt(5).unwrap().outcome, Outcome::Correct);
    }

    #[test]
    fn test_seeded_models_agree() {
        let config = one_to_ten(10);
        let mut a = DrawNumberImpl::with_seed(config, 42).unwrap();
        let mut b = DrawNumberImpl::with_seed(config, 42).unwrap();

        for guess in 1..=10 {
            assert_eq!(a.attempt(guess), b.attempt(guess));
        }
    }

    #[test]
    fn test_debug_hides_secret() {
        let model = DrawNumberImpl::new(one_to_ten(3), FixedSecret(7)).unwrap();
        let debug = format!("{model:?}");
        assert!(!debug.contains("secret"));
    }
}
