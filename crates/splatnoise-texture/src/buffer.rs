//! Working sample buffer and the packed 8-bit output buffer.

/// How many components each texel stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// One component per texel.
    Single,
    /// Four interleaved components per texel.
    Rgba,
}

impl ChannelLayout {
    /// Layout for a (clamped) channel count: one channel stays single,
    /// anything wider is stored as four.
    pub fn for_channels(chans: u8) -> Self {
        if chans == 1 {
            ChannelLayout::Single
        } else {
            ChannelLayout::Rgba
        }
    }

    /// Stored components per texel.
    pub fn stride(self) -> usize {
        match self {
            ChannelLayout::Single => 1,
            ChannelLayout::Rgba => 4,
        }
    }
}

/// Storage type of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    UnsignedByte,
}

/// Convert a [0, 1] sample to an 8-bit component by scaling and truncating.
///
/// The cast saturates, so NaN becomes 0 and out-of-range values clamp.
#[inline]
pub fn quantize(v: f64) -> u8 {
    (v * 255.0) as u8
}

/// Square float buffer the channels are synthesized into, one channel at a
/// time.
#[derive(Debug, Clone)]
pub struct SampleBuffer {
    /// Width and height in texels.
    pub dim: u32,
    /// Component layout.
    pub layout: ChannelLayout,
    /// Samples (interleaved, row-major).
    pub data: Vec<f64>,
}

impl SampleBuffer {
    /// Create a zero-filled buffer.
    pub fn new(dim: u32, layout: ChannelLayout) -> Self {
        let size = dim as usize * dim as usize * layout.stride();
        Self {
            dim,
            layout,
            data: vec![0.0; size],
        }
    }

    #[inline]
    fn index(&self, s: u32, t: u32, k: usize) -> usize {
        debug_assert!(k < self.layout.stride());
        (t as usize * self.dim as usize + s as usize) * self.layout.stride() + k
    }

    /// Get component `k` of texel `(s, t)`.
    #[inline]
    pub fn get(&self, s: u32, t: u32, k: usize) -> f64 {
        self.data[self.index(s, t, k)]
    }

    /// Set component `k` of texel `(s, t)`.
    #[inline]
    pub fn set(&mut self, s: u32, t: u32, k: usize, value: f64) {
        let idx = self.index(s, t, k);
        self.data[idx] = value;
    }

    /// Iterate component `k` of every texel in raster order.
    pub fn channel_values(&self, k: usize) -> impl Iterator<Item = f64> + '_ {
        self.data
            .iter()
            .skip(k)
            .step_by(self.layout.stride())
            .copied()
    }

    /// Quantize every component into an 8-bit pixel buffer.
    pub fn quantize(&self) -> PixelBuffer {
        PixelBuffer {
            dim: self.dim,
            layout: self.layout,
            component: ComponentType::UnsignedByte,
            data: self.data.iter().map(|&v| quantize(v)).collect(),
        }
    }
}

/// Finished 8-bit pixel buffer handed to the texture uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Width and height in pixels.
    pub dim: u32,
    /// Component layout.
    pub layout: ChannelLayout,
    /// Component storage type.
    pub component: ComponentType,
    /// Pixel data (interleaved, row-major).
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Number of stored components (`dim * dim * stride`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get component `k` of pixel `(s, t)`.
    #[inline]
    pub fn get(&self, s: u32, t: u32, k: usize) -> u8 {
        let stride = self.layout.stride();
        self.data[(t as usize * self.dim as usize + s as usize) * stride + k]
    }

    /// Iterate component `k` of every pixel in raster order.
    pub fn channel(&self, k: usize) -> impl Iterator<Item = u8> + '_ {
        self.data
            .iter()
            .skip(k)
            .step_by(self.layout.stride())
            .copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// BLAKE3 hash of the raw pixel bytes.
    pub fn content_hash(&self) -> String {
        blake3::hash(&self.data).to_hex().to_string()
    }
}
