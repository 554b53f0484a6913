//! Seeded random stream shared across the white-noise channels.
//!
//! One stream is created per texture and threaded through every channel in
//! order, so its position advances cumulatively: the second white-noise
//! channel continues where the first one stopped.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// PCG32 stream that counts how many samples it has handed out.
#[derive(Clone)]
pub struct RandomStream {
    inner: Pcg32,
    draws: u64,
}

impl RandomStream {
    /// Create a new stream from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating its bits into the
    /// upper half of the PCG state.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
            draws: 0,
        }
    }

    /// Draw the next sample in the range [0.0, 1.0).
    #[inline]
    pub fn next_sample(&mut self) -> f64 {
        self.draws += 1;
        self.inner.gen::<f64>()
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate a random value in the given range.
    ///
    /// Not counted as a sample draw.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }
}
