//! The fixed channel recipe table.
//!
//! Each output channel slot has one recipe. Slots 0 and 3 are tileable
//! fractal simplex noise; slots 1 and 2 are per-texel white noise.

/// Maximum number of channels a noise texture carries.
pub const MAX_CHANNELS: u8 = 4;

/// Octave count shared by every recipe.
pub const OCTAVES: u8 = 8;

/// Which evaluator a channel slot uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoiseVariant {
    /// Tileable multi-octave simplex noise, histogram-stretched to [0, 1].
    Fractal,
    /// Independent uniform samples drawn from the shared random stream.
    Random,
}

/// Parameters for one channel slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRecipe {
    /// Short name, used in logs.
    pub name: &'static str,
    pub frequency: f64,
    pub persistence: f64,
    pub lacunarity: f64,
    pub octaves: u8,
    pub variant: NoiseVariant,
}

/// Recipes indexed by channel slot.
///
/// The random slots keep their fractal parameters even though the random
/// evaluator never reads them.
pub static RECIPES: [ChannelRecipe; MAX_CHANNELS as usize] = [
    ChannelRecipe {
        name: "rocky",
        frequency: 4.0,
        persistence: 0.8,
        lacunarity: 2.2,
        octaves: OCTAVES,
        variant: NoiseVariant::Fractal,
    },
    ChannelRecipe {
        name: "white",
        frequency: 64.0,
        persistence: 1.0,
        lacunarity: 1.0,
        octaves: OCTAVES,
        variant: NoiseVariant::Random,
    },
    ChannelRecipe {
        name: "white-2",
        frequency: 33.0,
        persistence: 0.9,
        lacunarity: 1.0,
        octaves: OCTAVES,
        variant: NoiseVariant::Random,
    },
    ChannelRecipe {
        name: "clumpy",
        frequency: 1.2,
        persistence: 0.9,
        lacunarity: 4.0,
        octaves: OCTAVES,
        variant: NoiseVariant::Fractal,
    },
];

impl ChannelRecipe {
    /// Recipe for channel slot `k`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= MAX_CHANNELS`.
    pub fn for_slot(k: usize) -> &'static ChannelRecipe {
        &RECIPES[k]
    }
}

/// Coerce a requested channel count into `1..=MAX_CHANNELS`.
pub fn clamp_channels(chans: u32) -> u8 {
    chans.clamp(1, MAX_CHANNELS as u32) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_per_slot() {
        let variants: Vec<NoiseVariant> = RECIPES.iter().map(|r| r.variant).collect();
        assert_eq!(
            variants,
            vec![
                NoiseVariant::Fractal,
                NoiseVariant::Random,
                NoiseVariant::Random,
                NoiseVariant::Fractal,
            ]
        );
    }

    #[test]
    fn test_rocky_parameters() {
        let rocky = ChannelRecipe::for_slot(0);
        assert_eq!(rocky.name, "rocky");
        assert_eq!(rocky.frequency, 4.0);
        assert_eq!(rocky.persistence, 0.8);
        assert_eq!(rocky.lacunarity, 2.2);
        assert_eq!(rocky.octaves, 8);
    }

    #[test]
    fn test_all_recipes_use_eight_octaves() {
        assert!(RECIPES.iter().all(|r| r.octaves == 8));
    }

    #[test]
    fn test_clamp_channels() {
        assert_eq!(clamp_channels(0), 1);
        assert_eq!(clamp_channels(1), 1);
        assert_eq!(clamp_channels(3), 3);
        assert_eq!(clamp_channels(4), 4);
        assert_eq!(clamp_channels(17), 4);
        assert_eq!(clamp_channels(u32::MAX), 4);
    }
}
