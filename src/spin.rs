//! Seeded dreidel spinner for hosts.
//!
//! The engine never spins on its own: callers pass the drawn [`Symbol`] to
//! [`Game::play_turn`](crate::Game::play_turn). This helper gives hosts a
//! fair, reproducible source of symbols.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::symbol::{SYMBOLS, Symbol};

/// A fair four-sided dreidel driven by a seeded RNG.
#[derive(Debug, Clone)]
pub struct Spinner {
    rng: ChaCha8Rng,
}

impl Spinner {
    /// Creates a spinner with the given seed.
    ///
    /// Two spinners with the same seed produce the same sequence.
    ///
    /// ```
    /// use dreidel::Spinner;
    ///
    /// let mut a = Spinner::new(7);
    /// let mut b = Spinner::new(7);
    /// assert_eq!(a.spin(), b.spin());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Spins the dreidel.
    pub fn spin(&mut self) -> Symbol {
        SYMBOLS[self.rng.random_range(0..SYMBOLS.len())]
    }
}
