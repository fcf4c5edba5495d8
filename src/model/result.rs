//! Outcome of a single attempt.

use serde::{Deserialize, Serialize};

/// How a guess compares to the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Guess equals the secret.
    Correct,
    /// Guess is below the secret.
    TooLow,
    /// Guess is above the secret.
    TooHigh,
}

/// Result of one accepted attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// Comparison with the secret.
    pub outcome: Outcome,
    /// Attempts left after this one.
    pub remaining_attempts: i32,
    /// This was the last attempt and it missed.
    pub lost: bool,
}

impl DrawResult {
    /// Build a result, deriving `lost` from the outcome and remaining budget.
    #[must_use]
    pub fn new(outcome: Outcome, remaining_attempts: i32) -> Self {
        Self {
            outcome,
            remaining_attempts,
            lost: remaining_attempts == 0 && outcome != Outcome::Correct,
        }
    }

    /// True when the guess hit the secret.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Correct
    }

    /// Message shown to the player.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match (self.outcome, self.lost) {
            (Outcome::Correct, _) => "You won",
            (_, true) => "You lost",
            (Outcome::TooHigh, false) => "Your number is too high",
            (Outcome::TooLow, false) => "Your number is too low",
        }
    }
}

impl std::fmt::Display for DrawResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}
