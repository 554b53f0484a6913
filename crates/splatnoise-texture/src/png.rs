//! Deterministic PNG writer for inspecting generated textures.
//!
//! A debugging aid only: the texture itself is handed to the uploader as a
//! raw [`PixelBuffer`] and never goes through a file format. Fixed
//! compression settings keep identical pixels encoding to identical files.

use std::io::Write;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::texture::{NoiseTexture, PixelFormat};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    pub compression: Compression,
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Smallest files, slowest encode.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

fn color_type(format: PixelFormat) -> ColorType {
    match format {
        PixelFormat::R8 => ColorType::Grayscale,
        PixelFormat::Rgba8 => ColorType::Rgba,
    }
}

/// Write a texture to a PNG file.
pub fn write_texture(
    texture: &NoiseTexture,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);

    write_texture_to_writer(texture, writer, config)
}

/// Write a texture to any writer.
pub fn write_texture_to_writer<W: Write>(
    texture: &NoiseTexture,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    write_pixels(&texture.pixels, color_type(texture.format), writer, config)
}

fn write_pixels<W: Write>(
    pixels: &PixelBuffer,
    color: ColorType,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let mut encoder = Encoder::new(writer, pixels.dim, pixels.dim);
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(pixels.as_bytes())?;

    Ok(())
}

/// Encode to memory and return the bytes with their BLAKE3 hash.
pub fn write_texture_to_vec_with_hash(
    texture: &NoiseTexture,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_texture_to_writer(texture, &mut data, config)?;
    let hash = blake3::hash(&data).to_hex().to_string();
    Ok((data, hash))
}
