//! Texture orchestration and the upload descriptor.

use tracing::trace;

use crate::buffer::{ChannelLayout, PixelBuffer, SampleBuffer};
use crate::config::NoiseTextureConfig;
use crate::evaluate::ChannelSampler;
use crate::recipe::{clamp_channels, ChannelRecipe};
use crate::rng::RandomStream;
use crate::synth::{synthesize_channel, ChannelStats};

/// GPU-side pixel format matching the stored layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    R8,
    Rgba8,
}

impl From<ChannelLayout> for PixelFormat {
    fn from(layout: ChannelLayout) -> Self {
        match layout {
            ChannelLayout::Single => PixelFormat::R8,
            ChannelLayout::Rgba => PixelFormat::Rgba8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Linear,
    LinearMipmapLinear,
}

/// Sampler state the uploader applies to the finished texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplerSettings {
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub max_anisotropy: f32,
    /// False for single-channel textures, which some mipmap generators
    /// cannot process.
    pub generate_mipmaps: bool,
    pub release_image_after_upload: bool,
}

impl SamplerSettings {
    fn for_texture(chans: u8, config: &NoiseTextureConfig) -> Self {
        Self {
            wrap_s: WrapMode::Repeat,
            wrap_t: WrapMode::Repeat,
            min_filter: FilterMode::LinearMipmapLinear,
            mag_filter: FilterMode::Linear,
            max_anisotropy: 4.0,
            generate_mipmaps: chans != 1,
            release_image_after_upload: config.release_image_after_upload,
        }
    }
}

/// A finished noise texture ready for upload.
#[derive(Debug, Clone)]
pub struct NoiseTexture {
    /// Quantized pixels.
    pub pixels: PixelBuffer,
    pub format: PixelFormat,
    pub sampler: SamplerSettings,
    /// Number of populated channels after clamping.
    pub channels: u8,
    /// Per-channel statistics, in slot order.
    pub stats: Vec<ChannelStats>,
}

impl NoiseTexture {
    pub fn dim(&self) -> u32 {
        self.pixels.dim
    }
}

/// Generate a `dim × dim` noise texture with `chans` channels using the
/// default configuration.
///
/// `chans` is clamped into `1..=4`. One channel is stored single-component;
/// two or three channels are stored as RGBA with the unused components left
/// at 0.
pub fn create(dim: u32, chans: u32) -> NoiseTexture {
    create_with_config(dim, chans, &NoiseTextureConfig::default())
}

/// Generate a noise texture with an explicit configuration.
pub fn create_with_config(dim: u32, chans: u32, config: &NoiseTextureConfig) -> NoiseTexture {
    let chans = clamp_channels(chans);
    let layout = ChannelLayout::for_channels(chans);

    trace!(dim, chans, seed = config.seed, "creating noise texture");

    let mut buffer = SampleBuffer::new(dim, layout);
    let mut stream = RandomStream::new(config.seed);

    let stats: Vec<ChannelStats> = (0..chans as usize)
        .map(|k| {
            let recipe = ChannelRecipe::for_slot(k);
            let sampler = ChannelSampler::new(recipe, config.noise_seed);
            trace!(slot = k, recipe = recipe.name, "building channel sampler");
            synthesize_channel(
                &mut buffer,
                k,
                &sampler,
                &mut stream,
                config.normalization,
            )
        })
        .collect();

    NoiseTexture {
        pixels: buffer.quantize(),
        format: PixelFormat::from(layout),
        sampler: SamplerSettings::for_texture(chans, config),
        channels: chans,
        stats,
    }
}
