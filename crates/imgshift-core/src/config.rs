//! Tuning knobs for the converter.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

/// Read-only settings shared by every conversion a [`crate::Converter`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Quality used when a request does not specify one (1-100).
    pub default_quality: u8,
    /// Amount the quality search lowers quality after each oversized attempt.
    pub quality_step: u8,
    /// Maximum number of encodes the quality search performs, the floor
    /// attempt included.
    pub max_attempts: u32,
    /// Lowest quality the quality search tries (1-100).
    pub min_quality: u8,
    /// Encode PNG once instead of searching, since its size ignores quality.
    pub skip_png_search: bool,
    /// Largest `width * height` accepted before full decode.
    pub max_input_pixels: u64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_quality: 85,
            quality_step: 10,
            max_attempts: 10,
            min_quality: 10,
            skip_png_search: true,
            max_input_pixels: 100_000_000,
        }
    }
}

impl ConverterConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the settings describe a usable quality search.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.default_quality) {
            return Err(ConvertError::invalid(format!(
                "default_quality must be in 1..=100, got {}",
                self.default_quality
            )));
        }
        if !(1..=100).contains(&self.min_quality) {
            return Err(ConvertError::invalid(format!(
                "min_quality must be in 1..=100, got {}",
                self.min_quality
            )));
        }
        if self.quality_step == 0 {
            return Err(ConvertError::invalid("quality_step must be non-zero"));
        }
        if self.max_attempts == 0 {
            return Err(ConvertError::invalid("max_attempts must be non-zero"));
        }
        if self.max_input_pixels == 0 {
            return Err(ConvertError::invalid("max_input_pixels must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConverterConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_quality, 85);
        assert_eq!(config.quality_step, 10);
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.min_quality, 10);
        assert!(config.skip_png_search);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ConverterConfig::default();
        config.quality_step = 0;
        assert!(matches!(
            config.validate(),
            Err(ConvertError::InvalidInput(_))
        ));

        let mut config = ConverterConfig::default();
        config.max_attempts = 0;
        assert!(config.validate().is_err());

        let mut config = ConverterConfig::default();
        config.min_quality = 0;
        assert!(config.validate().is_err());

        let mut config = ConverterConfig::default();
        config.default_quality = 101;
        assert!(config.validate().is_err());

        let mut config = ConverterConfig::default();
        config.max_input_pixels = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ConverterConfig =
            serde_json::from_str(r#"{"default_quality": 100, "skip_png_search": false}"#)
                .unwrap();
        assert_eq!(config.default_quality, 100);
        assert!(!config.skip_png_search);
        assert_eq!(config.quality_step, 10);
        assert_eq!(config.max_input_pixels, 100_000_000);
    }
}
