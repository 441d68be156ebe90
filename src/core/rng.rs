//! Deterministic random number generation shared by every player process.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical sequence on every
//!   platform, which is what lets independently running processes agree on
//!   a shuffle without exchanging a single message.
//! - **Instance-scoped**: The generator is owned by the engine, never a
//!   process global, so side-by-side engines (several simulated players in
//!   one test) cannot disturb each other's sequences.
//! - **Reseedable**: A full replay resets the generator to the exact state
//!   a fresh construction would have.
//!
//! ## Usage
//!
//! ```
//! use policy_deck::core::DeckRng;
//!
//! let mut rng1 = DeckRng::new(42);
//! let mut rng2 = DeckRng::new(42);
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = vec![1, 2, 3, 4, 5];
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//!
//! assert_eq!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG owned by a single engine instance.
///
/// Uses ChaCha8: the stream depends only on the seed, not on the platform
/// or the standard library's `RandomState`, so two processes seeded alike
/// stay bit-for-bit in lockstep.
///
/// Entropy is consumed through `shuffle` alone. The order of shuffle calls
/// is part of the cross-process contract: construction performs the role
/// shuffle, then the policy-value shuffle, then the discard-order shuffle,
/// and every later reshuffle repeats the last two in that order.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Reset the generator to the reproducible state derived from `seed`.
    ///
    /// Called at every full replay so the reconstruction consumes the exact
    /// sequence a fresh construction would.
    pub fn reseed(&mut self, seed: u64) {
        self.inner = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// The seed this generator was last (re)seeded with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
