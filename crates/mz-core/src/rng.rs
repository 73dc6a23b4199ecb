//! Deterministic, injectable RNG for navigation decisions.
//!
//! # Determinism strategy
//!
//! Every controller owns its own `NavRng`.  Two controllers built from the
//! same [`NavConfig`][crate::NavConfig] draw from separate streams:
//!
//!   seed = config_seed XOR (stream * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio, so
//! neighbouring stream numbers land far apart in the seed space.
//!
//! `NavRng` implements [`RngCore`], which means anything generic over
//! `R: rand::Rng` (the heading selector, the random walker) accepts it as
//! well as any other source, including scripted ones in tests.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded per-controller RNG.
pub struct NavRng(SmallRng);

impl NavRng {
    pub fn new(seed: u64) -> Self {
        NavRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed an independent stream derived from `seed`.
    pub fn stream(seed: u64, stream: u64) -> Self {
        NavRng::new(seed ^ stream.wrapping_mul(MIXING_CONSTANT))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl RngCore for NavRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.0.try_fill_bytes(dest)
    }
}
