//! Deterministic random number generation seeded from the create parameters.
//!
//! The random seed recorded in a descriptor fully determines every random
//! choice made while laying out the initial state. Each player draws from
//! an independent stream so that one player's pile order never depends on
//! the other player's deck size.
//!
//! ```
//! use gitcg::core::{GameRng, Who};
//!
//! let mut a = GameRng::new(42).for_player(Who::Player0);
//! let mut b = GameRng::new(42).for_player(Who::Player0);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::Who;

/// Stream-splitting constant (golden ratio, 64-bit).
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG for initial state layout.
///
/// Uses ChaCha8 so that sequences are stable across platforms.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draw a fresh seed from OS entropy.
    ///
    /// Used when a descriptor does not pin a random seed.
    #[must_use]
    pub fn entropy_seed() -> u64 {
        rand::thread_rng().gen()
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one player.
    ///
    /// The same seed and player always produce the same stream.
    #[must_use]
    pub fn for_player(&self, who: Who) -> Self {
        let stream = (who.index() as u64 + 1).wrapping_mul(STREAM_MIX);
        Self::new(self.seed ^ stream)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
