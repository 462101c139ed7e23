//! Deterministic random number generation for card selection.
//!
//! Generation makes three random draws at most (template pick, flavor pick,
//! and sometimes a fallback flavor pick). Seeding the RNG makes a whole
//! generation pass reproducible, which the tests rely on heavily.
//!
//! ## Context streams
//!
//! `for_context` derives an independent deterministic stream for a named
//! purpose, so the template pick and the flavor pick never perturb each
//! other's sequences:
//!
//! ```
//! use cardsmith::core::GenRng;
//!
//! let rng = GenRng::new(42);
//! let mut template_rng = rng.for_context("template");
//! let mut flavor_rng = rng.for_context("flavor");
//!
//! let a: Vec<_> = (0..10).map(|_| template_rng.gen_range_usize(0..1000)).collect();
//! let b: Vec<_> = (0..10).map(|_| flavor_rng.gen_range_usize(0..1000)).collect();
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seedable deterministic RNG.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Same seed, same sequence.
#[derive(Clone, Debug)]
pub struct GenRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GenRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained so a surprising generation can still be
    /// reproduced afterwards via [`GenRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was constructed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
