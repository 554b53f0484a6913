//! Two-pass channel synthesis and histogram stretch.

use tracing::{debug, warn};

use crate::buffer::SampleBuffer;
use crate::config::Normalization;
use crate::evaluate::ChannelSampler;
use crate::rng::RandomStream;

/// Initial running minimum; above any sample an evaluator produces.
const MIN_SENTINEL: f64 = 10.0;
/// Initial running maximum; below any sample an evaluator produces.
const MAX_SENTINEL: f64 = -10.0;

/// Observed statistics for one synthesized channel.
///
/// For an empty buffer `min` and `max` keep their sentinel values
/// (10 and -10) and `stretched` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    /// Channel slot.
    pub slot: usize,
    /// Smallest first-pass sample.
    pub min: f64,
    /// Largest first-pass sample.
    pub max: f64,
    /// Values drawn from the random stream by this channel.
    pub draws: u64,
    /// Whether the second pass rescaled the channel.
    pub stretched: bool,
}

impl ChannelStats {
    /// True when the channel never varied.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Fill channel `k` of `buffer` from `sampler`.
///
/// Pass 1 evaluates every texel in raster order (rows outer, columns inner)
/// and tracks min/max. Pass 2, for fractal samplers only, rescales the
/// channel so that min maps to 0 and max maps to 1. Other channels of the
/// buffer are left untouched.
pub fn synthesize_channel(
    buffer: &mut SampleBuffer,
    k: usize,
    sampler: &ChannelSampler,
    stream: &mut RandomStream,
    normalization: Normalization,
) -> ChannelStats {
    let dim = buffer.dim;
    let draws_before = stream.draws();

    let mut nmin = MIN_SENTINEL;
    let mut nmax = MAX_SENTINEL;

    for t in 0..dim {
        let rt = t as f64 / dim as f64;
        for s in 0..dim {
            let rs = s as f64 / dim as f64;
            let n = sampler.evaluate(rs, rt, stream);

            if n < nmin {
                nmin = n;
            }
            if n > nmax {
                nmax = n;
            }

            buffer.set(s, t, k, n);
        }
    }

    let mut stats = ChannelStats {
        slot: k,
        min: nmin,
        max: nmax,
        draws: stream.draws() - draws_before,
        stretched: false,
    };

    if sampler.needs_stretch() && dim > 0 {
        if stats.is_degenerate() {
            warn!(slot = k, value = nmin, "channel has no variation");
        }

        let skip = normalization == Normalization::Guarded && stats.is_degenerate();
        if !skip {
            let range = nmax - nmin;
            for t in 0..dim {
                for s in 0..dim {
                    let v = buffer.get(s, t, k);
                    buffer.set(s, t, k, ((v - nmin) / range).clamp(0.0, 1.0));
                }
            }
            stats.stretched = true;
        }
    }

    debug!(
        slot = k,
        min = stats.min,
        max = stats.max,
        draws = stats.draws,
        stretched = stats.stretched,
        "synthesized channel"
    );

    stats
}
