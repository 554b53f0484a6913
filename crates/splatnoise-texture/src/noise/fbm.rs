//! Fractal Brownian Motion (FBM) noise.
//!
//! FBM layers multiple octaves of noise to create natural-looking patterns.

use std::f64::consts::TAU;

use super::Noise4D;

/// Fractal Brownian Motion generator.
///
/// Combines multiple octaves of a base noise function to create
/// more complex, natural-looking patterns.
#[derive(Clone)]
pub struct Fbm<N: Noise4D + Clone> {
    /// The base noise function.
    noise: N,
    /// Frequency of the first octave.
    frequency: f64,
    /// Number of octaves to combine.
    octaves: u8,
    /// How much each octave contributes relative to the previous.
    persistence: f64,
    /// How much detail increases with each octave.
    lacunarity: f64,
    /// Divide the octave sum by the total amplitude and remap into `range`.
    normalize: bool,
    /// Output range used when `normalize` is set.
    range: (f64, f64),
}

impl<N: Noise4D + Clone> Fbm<N> {
    /// Create a new FBM generator with default settings.
    ///
    /// Default: frequency 1.0, 4 octaves, 0.5 persistence, 2.0 lacunarity,
    /// normalized into [-1, 1].
    pub fn new(noise: N) -> Self {
        Self {
            noise,
            frequency: 1.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            normalize: true,
            range: (-1.0, 1.0),
        }
    }

    /// Set the base frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the number of octaves.
    pub fn with_octaves(mut self, octaves: u8) -> Self {
        self.octaves = octaves.max(1);
        self
    }

    /// Set the persistence (amplitude multiplier per octave).
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Set the lacunarity (frequency multiplier per octave).
    pub fn with_lacunarity(mut self, lacunarity: f64) -> Self {
        self.lacunarity = lacunarity;
        self
    }

    /// Enable or disable amplitude normalization.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the output range applied when normalizing.
    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.range = (low, high);
        self
    }

    /// Sample at normalized texture coordinates so that the result repeats
    /// with period 1 on both axes.
    ///
    /// Each axis is wrapped onto a circle of circumference 1; the pair of
    /// circles is a torus in 4D, so `s = 0` and `s = 1` hit the same point.
    pub fn sample_tiled(&self, s: f64, t: f64) -> f64 {
        let radius = 1.0 / TAU;
        let (sin_s, cos_s) = (s * TAU).sin_cos();
        let (sin_t, cos_t) = (t * TAU).sin_cos();
        self.sample(
            cos_s * radius,
            cos_t * radius,
            sin_s * radius,
            sin_t * radius,
        )
    }
}

impl<N: Noise4D + Clone> Noise4D for Fbm<N> {
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut max_value = 0.0;

        for _ in 0..self.octaves {
            total += self
                .noise
                .sample(x * frequency, y * frequency, z * frequency, w * frequency)
                * amplitude;
            max_value += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        if !self.normalize {
            return total;
        }

        // [-1, 1] -> [low, high]
        let (low, high) = self.range;
        let n = total / max_value;
        n * (high - low) * 0.5 + (high + low) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::SimplexNoise;

    #[test]
    fn test_fbm_deterministic() {
        let noise1 = Fbm::new(SimplexNoise::new(42)).with_octaves(8);
        let noise2 = Fbm::new(SimplexNoise::new(42)).with_octaves(8);

        for i in 0..100 {
            let s = i as f64 * 0.01;
            let t = i as f64 * 0.013;
            assert_eq!(noise1.sample_tiled(s, t), noise2.sample_tiled(s, t));
        }
    }

    #[test]
    fn test_fbm_range_mapping() {
        let fbm = Fbm::new(SimplexNoise::new(0))
            .with_frequency(4.0)
            .with_octaves(8)
            .with_range(0.0, 1.0);

        for i in 0..32 {
            for j in 0..32 {
                let v = fbm.sample_tiled(i as f64 / 32.0, j as f64 / 32.0);
                // Octave sums can overshoot slightly past the target range
                assert!(v > -0.5 && v < 1.5, "value {} far outside [0, 1]", v);
            }
        }
    }

    #[test]
    fn test_fbm_tiles_on_both_axes() {
        let fbm = Fbm::new(SimplexNoise::new(0))
            .with_frequency(1.2)
            .with_lacunarity(4.0)
            .with_octaves(8);

        for i in 0..16 {
            let u = i as f64 / 16.0;
            assert!((fbm.sample_tiled(0.0, u) - fbm.sample_tiled(1.0, u)).abs() < 1e-9);
            assert!((fbm.sample_tiled(u, 0.0) - fbm.sample_tiled(u, 1.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_fbm_unnormalized_ignores_range() {
        let base = Fbm::new(SimplexNoise::new(3)).with_normalize(false);
        let ranged = base.clone().with_range(0.0, 1.0);
        assert_eq!(base.sample_tiled(0.3, 0.6), ranged.sample_tiled(0.3, 0.6));
    }

    #[test]
    fn test_fbm_octaves_clamped_to_one() {
        let fbm = Fbm::new(SimplexNoise::new(42)).with_octaves(0);
        assert!(fbm.sample_tiled(0.25, 0.75).is_finite());
    }
}
