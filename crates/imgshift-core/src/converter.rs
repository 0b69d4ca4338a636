//! The conversion pipeline.
//!
//! # Pipeline Order
//!
//! 1. Decode (header check, full decode)
//! 2. EXIF orientation correction
//! 3. Proportional resize into the bounding box
//! 4. Encode, or quality search when a byte ceiling is set
//!
//! Resize runs on the upright image, so bounds apply to displayed width and
//! height rather than stored ones.

use crate::config::ConverterConfig;
use crate::decode::decode_image;
use crate::encode::{encode, EncoderParams};
use crate::error::Result;
use crate::options::ConversionOptions;
use crate::resize::resize_to_fit;
use crate::result::{ConversionMetadata, ConversionResult};
use crate::search::encode_within_size;

/// Stateless image converter.
///
/// Holds only read-only tuning; one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a converter with validated settings.
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert `bytes` according to `options`.
    ///
    /// # Errors
    ///
    /// - `UnsupportedOrCorruptImage` if the bytes cannot be decoded
    /// - `ImageTooLarge` if the header exceeds the pixel limit
    /// - `EncodeFailure` if the target encoder rejects the image
    pub fn convert(&self, bytes: &[u8], options: &ConversionOptions) -> Result<ConversionResult> {
        let format = options.target_format();
        let quality = options.quality().unwrap_or(self.config.default_quality);
        log::debug!(
            "Starting conversion: target={}, options={:?}",
            format,
            options
        );

        let decoded = decode_image(bytes, self.config.max_input_pixels)?;
        let original_format = decoded.format();
        let original_dimensions = decoded.dimensions();

        let resized = resize_to_fit(decoded, options.max_width(), options.max_height());
        let converted_dimensions = resized.dimensions();
        let image = resized.into_image();

        let (encoded, used_quality, attempts) = match options.max_size_bytes() {
            Some(max_bytes) => {
                let outcome =
                    encode_within_size(&image, format, quality, max_bytes, &self.config)?;
                (outcome.bytes, outcome.quality, outcome.attempts)
            }
            None => {
                let params = EncoderParams::for_format(format, quality);
                (encode(&image, params)?, params.quality(), 1)
            }
        };

        let original_size_bytes = bytes.len() as u64;
        let converted_size_bytes = encoded.len() as u64;
        let metadata = ConversionMetadata {
            original_format: original_format.as_str().to_string(),
            converted_format: format,
            original_size_bytes,
            converted_size_bytes,
            original_dimensions,
            converted_dimensions,
            compression_ratio: ConversionMetadata::ratio(original_size_bytes, converted_size_bytes),
            quality: used_quality,
            attempts,
        };

        log::info!(
            "Conversion complete: {} -> {} ({} -> {} bytes, {}x{} -> {}x{})",
            metadata.original_format,
            metadata.converted_format,
            original_size_bytes,
            converted_size_bytes,
            original_dimensions.0,
            original_dimensions.1,
            converted_dimensions.0,
            converted_dimensions.1
        );

        Ok(ConversionResult {
            bytes: encoded,
            metadata,
        })
    }
}

/// Convert with the default [`ConverterConfig`].
pub fn convert(bytes: &[u8], options: &ConversionOptions) -> Result<ConversionResult> {
    Converter::default().convert(bytes, options)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
