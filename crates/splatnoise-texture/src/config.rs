//! Generation settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the histogram stretch treats a channel whose samples never vary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
    /// Always divide by `max - min`, even when it is zero. Every texel then
    /// equals `min`, so each sample becomes `0 / 0 = NaN` and quantizes to 0.
    #[default]
    Unguarded,
    /// Skip the stretch when `max == min`, keeping the first-pass samples.
    Guarded,
}

/// Settings for [`crate::create_with_config`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseTextureConfig {
    /// Seed of the random stream shared by the white-noise channels.
    pub seed: u32,
    /// Seed of the simplex permutation table.
    pub noise_seed: u32,
    pub normalization: Normalization,
    /// Hint for the uploader to drop the CPU-side pixels once on the GPU.
    pub release_image_after_upload: bool,
}

impl Default for NoiseTextureConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            noise_seed: 0,
            normalization: Normalization::Unguarded,
            release_image_after_upload: false,
        }
    }
}

impl NoiseTextureConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_json_is_default() {
        let config = NoiseTextureConfig::from_json("{}").unwrap();
        assert_eq!(config, NoiseTextureConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            NoiseTextureConfig::from_json(r#"{"seed": 9, "normalization": "guarded"}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.noise_seed, 0);
        assert_eq!(config.normalization, Normalization::Guarded);
        assert!(!config.release_image_after_upload);
    }

    #[test]
    fn test_invalid_json() {
        let err = NoiseTextureConfig::from_json(r#"{"normalization": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
