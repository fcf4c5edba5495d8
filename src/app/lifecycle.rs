//! Application lifecycle: a shutdown signal the entry point waits on.
//!
//! `Running -> Stopping -> Stopped`. Views request the stop; the owner of the
//! application waits for it, releases resources, then marks the app stopped.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Where the application is in its shutdown sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Accepting commands.
    Running,
    /// Quit requested; resources not yet released.
    Stopping,
    /// Shut down.
    Stopped,
}

/// Shared lifecycle state with a wake-up for waiters.
#[derive(Debug)]
pub struct Lifecycle {
    state: Mutex<LifecycleState>,
    changed: Condvar,
}

impl Lifecycle {
    /// A running lifecycle.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LifecycleState::Running),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LifecycleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LifecycleState {
        *self.lock()
    }

    /// Ask the application to stop.
    ///
    /// Returns true if this call moved the state out of `Running`.
    pub fn request_stop(&self) -> bool {
        let mut state = self.lock();
        if *state != LifecycleState::Running {
            return false;
        }
        *state = LifecycleState::Stopping;
        self.changed.notify_all();
        true
    }

    /// Block until a stop has been requested.
    pub fn wait_for_stop(&self) {
        let state = self.lock();
        let _state = self
            .changed
            .wait_while(state, |s| *s == LifecycleState::Running)
            .unwrap_or_else(PoisonError::into_inner);
    }

    /// Mark shutdown complete. Terminal.
    pub fn mark_stopped(&self) {
        *self.lock() = LifecycleState::Stopped;
        self.changed.notify_all();
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
