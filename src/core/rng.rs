//! Secret number sources.
//!
//! The model never draws numbers itself; it asks a [`SecretSource`]. Two
//! sources ship with the crate:
//!
//! - [`DrawRng`]: seedable ChaCha8 stream, deterministic per seed
//! - [`FixedSecret`]: always the same number, for scripted rounds
//!
//! ```
//! use draw_number::core::{DrawRng, SecretSource};
//!
//! let mut rng = DrawRng::new(42);
//! let secret = rng.draw(1, 10);
//! assert!((1..=10).contains(&secret));
//!
//! // Same seed, same secret.
//! assert_eq!(DrawRng::new(42).draw(1, 10), secret);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Something that can pick the secret for a round.
pub trait SecretSource: Send {
    /// Draw a value uniformly from `[min, max]`, both bounds inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn draw(&mut self, min: i32, max: i32) -> i32;
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct DrawRng {
    inner: ChaCha8Rng,
}

impl DrawRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }
}

impl SecretSource for DrawRng {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.inner.gen_range(min..=max)
    }
}

/// A source that always yields the same secret.
///
/// The value is clamped into the requested range so the model's invariant
/// (secret within bounds) holds even for a mismatched fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSecret(pub i32);

impl SecretSource for FixedSecret {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.0.clamp(min, max)
    }
}
