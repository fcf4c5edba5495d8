//! The two halves of the view contract.
//!
//! Views implement [`DrawNumberView`] and receive game events. The
//! coordinator implements [`DrawNumberViewObserver`] and receives user
//! commands from views.
//!
//! ## Implementation Notes
//!
//! - `set_observer` is called exactly once, before `start`
//! - `start` must return promptly; interactive views spawn their own input loop
//! - Notifications (`result`, `number_incorrect`, `display_error`) must not
//!   call back into the observer on the same thread

use std::sync::Arc;

use crate::model::DrawResult;

/// Receives user commands from views.
pub trait DrawNumberViewObserver: Send + Sync {
    /// The user submitted a guess.
    fn new_attempt(&self, guess: i32);

    /// The user asked for a new round.
    fn reset_game(&self);

    /// The user asked to leave the game.
    fn quit(&self);
}

/// Anything that can present game events and forward user commands.
pub trait DrawNumberView: Send {
    /// Attach the sink for user commands.
    fn set_observer(&mut self, observer: Arc<dyn DrawNumberViewObserver>);

    /// Begin accepting user input.
    fn start(&mut self);

    /// Present the outcome of an accepted guess.
    fn result(&mut self, result: &DrawResult);

    /// The last guess was rejected (out of range or no attempts left).
    fn number_incorrect(&mut self);

    /// Present an error message.
    fn display_error(&mut self, message: &str);
}
