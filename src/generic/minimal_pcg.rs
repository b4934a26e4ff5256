//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] and [SeedableRng] traits.
//!
//! Each [context](crate::context) stores a source of rng, seeded from the [configuration](crate::config::Config::seed).
//! The rng is only consulted when breaking ties [at random](crate::config::TieBreak::Random), and so a solve with a given seed is reproducible.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment
#[derive(Clone, Debug, Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// The increment must be odd.
        const INCREMENT: u64 = 1442695040888963407;
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}
