//! Tileable multi-channel noise textures.
//!
//! Produces a square 8-bit texture whose channels each hold an independent
//! noise field in [0, 1], meant to be sampled with repeat wrapping when
//! splatting terrain detail.
//!
//! | Slot | Recipe    | Kind                                       |
//! |------|-----------|--------------------------------------------|
//! | 0    | `rocky`   | fractal simplex, frequency 4.0             |
//! | 1    | `white`   | white noise                                |
//! | 2    | `white-2` | white noise, continuing the same stream    |
//! | 3    | `clumpy`  | fractal simplex, frequency 1.2, lacunarity 4 |
//!
//! Fractal channels are histogram-stretched so their darkest texel is 0 and
//! their brightest is 255.
//!
//! # Example
//!
//! ```
//! use splatnoise_texture::{create, PixelFormat};
//!
//! let texture = create(64, 2);
//! assert_eq!(texture.format, PixelFormat::Rgba8);
//! assert_eq!(texture.pixels.len(), 64 * 64 * 4);
//! ```
//!
//! # Determinism
//!
//! The same dimension, channel count and configuration always produce
//! byte-identical pixels. The white-noise channels share one PCG32 stream,
//! so channel 2 receives the values following those drawn for channel 1.

pub mod buffer;
pub mod config;
pub mod evaluate;
pub mod noise;
pub mod png;
pub mod recipe;
pub mod rng;
pub mod synth;
pub mod texture;

// Re-export main types for convenience
pub use buffer::{ChannelLayout, ComponentType, PixelBuffer, SampleBuffer};
pub use config::{ConfigError, NoiseTextureConfig, Normalization};
pub use evaluate::ChannelSampler;
pub use noise::{Fbm, Noise4D, SimplexNoise};
pub use png::{PngConfig, PngError};
pub use recipe::{ChannelRecipe, NoiseVariant, RECIPES};
pub use rng::RandomStream;
pub use synth::{synthesize_channel, ChannelStats};
pub use texture::{
    create, create_with_config, FilterMode, NoiseTexture, PixelFormat, SamplerSettings, WrapMode,
};
