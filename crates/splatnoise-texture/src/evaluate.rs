//! Per-channel noise evaluator.

use crate::noise::{Fbm, SimplexNoise};
use crate::recipe::{ChannelRecipe, NoiseVariant};
use crate::rng::RandomStream;

/// Evaluator built once per channel from its recipe.
#[derive(Clone)]
pub enum ChannelSampler {
    /// Tileable fractal simplex noise normalized into [0, 1].
    Fractal(Fbm<SimplexNoise>),
    /// Next value of the shared random stream, independent of position.
    Random,
}

impl ChannelSampler {
    /// Build the evaluator for `recipe`, seeding the simplex permutation
    /// with `noise_seed`.
    pub fn new(recipe: &ChannelRecipe, noise_seed: u32) -> Self {
        match recipe.variant {
            NoiseVariant::Fractal => ChannelSampler::Fractal(
                Fbm::new(SimplexNoise::new(noise_seed))
                    .with_normalize(true)
                    .with_range(0.0, 1.0)
                    .with_frequency(recipe.frequency)
                    .with_persistence(recipe.persistence)
                    .with_lacunarity(recipe.lacunarity)
                    .with_octaves(recipe.octaves),
            ),
            NoiseVariant::Random => ChannelSampler::Random,
        }
    }

    /// Whether channels filled by this sampler get the histogram stretch.
    pub fn needs_stretch(&self) -> bool {
        matches!(self, ChannelSampler::Fractal(_))
    }

    /// Sample at normalized texel coordinates `s, t` in [0, 1).
    ///
    /// The random variant ignores the coordinates and advances `stream`
    /// by exactly one draw.
    #[inline]
    pub fn evaluate(&self, s: f64, t: f64, stream: &mut RandomStream) -> f64 {
        match self {
            // Octave sums can overshoot the target range slightly
            ChannelSampler::Fractal(fbm) => fbm.sample_tiled(s, t).clamp(0.0, 1.0),
            ChannelSampler::Random => stream.next_sample(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractal_in_unit_range() {
        let sampler = ChannelSampler::new(ChannelRecipe::for_slot(0), 0);
        let mut stream = RandomStream::new(0);

        for t in 0..16 {
            for s in 0..16 {
                let v = sampler.evaluate(s as f64 / 16.0, t as f64 / 16.0, &mut stream);
                assert!((0.0..=1.0).contains(&v));
            }
        }
        assert_eq!(stream.draws(), 0, "fractal channels must not touch the stream");
    }

    #[test]
    fn test_fractal_tiles_at_seam() {
        for slot in [0, 3] {
            let sampler = ChannelSampler::new(ChannelRecipe::for_slot(slot), 0);
            let mut stream = RandomStream::new(0);
            for i in 0..8 {
                let t = i as f64 / 8.0;
                let left = sampler.evaluate(0.0, t, &mut stream);
                let right = sampler.evaluate(1.0, t, &mut stream);
                assert!((left - right).abs() < 1e-9, "slot {} seam mismatch at t={}", slot, t);
            }
        }
    }

    #[test]
    fn test_needs_stretch_per_slot() {
        let stretched: Vec<bool> = (0..4)
            .map(|k| ChannelSampler::new(ChannelRecipe::for_slot(k), 0).needs_stretch())
            .collect();
        assert_eq!(stretched, vec![true, false, false, true]);
    }

    #[test]
    fn test_random_ignores_coordinates() {
        let sampler = ChannelSampler::new(ChannelRecipe::for_slot(1), 0);
        let mut stream = RandomStream::new(0);
        let mut reference = RandomStream::new(0);

        let a = sampler.evaluate(0.5, 0.5, &mut stream);
        let b = sampler.evaluate(0.5, 0.5, &mut stream);

        assert_eq!(a, reference.next_sample());
        assert_eq!(b, reference.next_sample());
        assert_eq!(stream.draws(), 2);
    }
}
