//! Conversion options and validation of the raw request record.
//!
//! [`ConversionRequest`] mirrors the loosely typed fields a form or JSON body
//! carries. [`ConversionOptions`] is the validated form the pipeline accepts;
//! every check here runs before a single byte of the image is decoded.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Output formats the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    WebP,
    Jpeg,
    Png,
}

impl OutputFormat {
    /// All output formats, in the order they are advertised.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::WebP, OutputFormat::Jpeg, OutputFormat::Png];

    /// Canonical lowercase name, also used as the file extension.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::WebP => "webp",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Png => "png",
        }
    }

    /// MIME type of the encoded output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::WebP => "image/webp",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::Png => "image/png",
        }
    }

    /// Whether the quality setting changes the encoded output.
    pub fn supports_quality(self) -> bool {
        !matches!(self, OutputFormat::Png)
    }

    /// Whether the format can store an alpha channel.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    /// Parse a format name. Case-insensitive; `jpg` is accepted for JPEG.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webp" => Ok(OutputFormat::WebP),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            other => Err(ConvertError::invalid(format!(
                "Unsupported format '{}'. Allowed: webp, jpeg, jpg, png",
                other
            ))),
        }
    }
}

/// Validated options for one conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    target_format: OutputFormat,
    max_width: Option<NonZeroU32>,
    max_height: Option<NonZeroU32>,
    max_size_bytes: Option<u64>,
    quality: Option<u8>,
}

impl ConversionOptions {
    /// Options that only change the format.
    pub fn new(target_format: OutputFormat) -> Self {
        Self {
            target_format,
            max_width: None,
            max_height: None,
            max_size_bytes: None,
            quality: None,
        }
    }

    /// Bound the output width. Zero is rejected.
    pub fn with_max_width(mut self, width: u32) -> Result<Self> {
        self.max_width = Some(
            NonZeroU32::new(width).ok_or_else(|| ConvertError::invalid("max_width must be > 0"))?,
        );
        Ok(self)
    }

    /// Bound the output height. Zero is rejected.
    pub fn with_max_height(mut self, height: u32) -> Result<Self> {
        self.max_height = Some(
            NonZeroU32::new(height)
                .ok_or_else(|| ConvertError::invalid("max_height must be > 0"))?,
        );
        Ok(self)
    }

    /// Cap the encoded size. Zero is rejected.
    pub fn with_max_size_bytes(mut self, bytes: u64) -> Result<Self> {
        if bytes == 0 {
            return Err(ConvertError::invalid("max_size must be > 0"));
        }
        self.max_size_bytes = Some(bytes);
        Ok(self)
    }

    /// Cap the encoded size in mebibytes, as the upload form expresses it.
    pub fn with_max_size_mb(self, megabytes: f64) -> Result<Self> {
        if !megabytes.is_finite() || megabytes <= 0.0 {
            return Err(ConvertError::invalid(format!(
                "max_size_mb must be a positive number, got {}",
                megabytes
            )));
        }
        let bytes = (megabytes * BYTES_PER_MB).floor().max(1.0) as u64;
        self.with_max_size_bytes(bytes)
    }

    /// Set the encoder quality (1-100).
    pub fn with_quality(mut self, quality: u8) -> Result<Self> {
        if !(1..=100).contains(&quality) {
            return Err(ConvertError::invalid(format!(
                "quality must be in 1..=100, got {}",
                quality
            )));
        }
        self.quality = Some(quality);
        Ok(self)
    }

    pub fn target_format(&self) -> OutputFormat {
        self.target_format
    }

    pub fn max_width(&self) -> Option<u32> {
        self.max_width.map(NonZeroU32::get)
    }

    pub fn max_height(&self) -> Option<u32> {
        self.max_height.map(NonZeroU32::get)
    }

    pub fn max_size_bytes(&self) -> Option<u64> {
        self.max_size_bytes
    }

    /// The requested quality, if any. The converter falls back to its
    /// configured default when this is `None`.
    pub fn quality(&self) -> Option<u8> {
        self.quality
    }
}

/// Raw conversion request as received from an upload form or JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    #[serde(alias = "targetFormat")]
    pub target_format: String,
    #[serde(default, alias = "maxWidth")]
    pub max_width: Option<i64>,
    #[serde(default, alias = "maxHeight")]
    pub max_height: Option<i64>,
    #[serde(default, alias = "maxSizeMb")]
    pub max_size_mb: Option<f64>,
    #[serde(default)]
    pub quality: Option<i64>,
}

impl ConversionRequest {
    /// A request that only names the target format.
    pub fn new(target_format: impl Into<String>) -> Self {
        Self {
            target_format: target_format.into(),
            ..Default::default()
        }
    }
}

impl TryFrom<&ConversionRequest> for ConversionOptions {
    type Error = ConvertError;

    fn try_from(request: &ConversionRequest) -> Result<Self> {
        let mut options = ConversionOptions::new(request.target_format.parse()?);

        if let Some(width) = request.max_width {
            options = options.with_max_width(dimension("max_width", width)?)?;
        }
        if let Some(height) = request.max_height {
            options = options.with_max_height(dimension("max_height", height)?)?;
        }
        if let Some(megabytes) = request.max_size_mb {
            options = options.with_max_size_mb(megabytes)?;
        }
        if let Some(quality) = request.quality {
            let quality = u8::try_from(quality).map_err(|_| {
                ConvertError::invalid(format!("quality must be in 1..=100, got {}", quality))
            })?;
            options = options.with_quality(quality)?;
        }

        Ok(options)
    }
}

impl TryFrom<ConversionRequest> for ConversionOptions {
    type Error = ConvertError;

    fn try_from(request: ConversionRequest) -> Result<Self> {
        ConversionOptions::try_from(&request)
    }
}

fn dimension(name: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(ConvertError::invalid(format!("{} must be > 0, got {}", name, value)));
    }
    u32::try_from(value)
        .map_err(|_| ConvertError::invalid(format!("{} is too large: {}", name, value)))
}

/// Reject uploads whose declared content type is not an image.
pub fn validate_content_type(content_type: Option<&str>) -> Result<()> {
    match content_type {
        Some(ct) if ct.trim().to_ascii_lowercase().starts_with("image/") => Ok(()),
        _ => Err(ConvertError::invalid("Invalid image file")),
    }
}
