//! Noise generation primitives.
//!
//! All noise functions are pure Rust and produce deterministic output given
//! the same seed.

mod fbm;
mod simplex;

pub use fbm::Fbm;
pub use simplex::SimplexNoise;

/// Trait for 4D noise generators.
///
/// Four dimensions are what a seamless 2D tile needs: each texture axis is
/// mapped onto its own circle, and the two circles form a torus in 4D.
pub trait Noise4D {
    /// Sample the noise at a given 4D coordinate.
    /// Returns a value roughly in the range [-1, 1].
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}
