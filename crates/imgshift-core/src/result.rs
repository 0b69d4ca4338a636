//! Conversion output and the metadata describing it.

use serde::{Deserialize, Serialize};

use crate::options::OutputFormat;

/// What a conversion did, computed from the actual input and output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionMetadata {
    /// Detected input format (`png`, `jpeg`, ... or `unknown`).
    pub original_format: String,
    pub converted_format: OutputFormat,
    pub original_size_bytes: u64,
    pub converted_size_bytes: u64,
    /// Upright `(width, height)` of the input, after EXIF orientation.
    pub original_dimensions: (u32, u32),
    /// `(width, height)` of the image written to the output bytes.
    pub converted_dimensions: (u32, u32),
    /// `converted_size_bytes / original_size_bytes`; above 1.0 when the
    /// conversion grew the file.
    pub compression_ratio: f64,
    /// Quality of the returned encode; `None` for PNG.
    pub quality: Option<u8>,
    /// Encode calls made, including quality search attempts.
    pub attempts: u32,
}

impl ConversionMetadata {
    pub(crate) fn ratio(original: u64, converted: u64) -> f64 {
        if original == 0 {
            return 0.0;
        }
        converted as f64 / original as f64
    }

    /// `Content-Type` of the converted bytes.
    pub fn content_type(&self) -> &'static str {
        self.converted_format.mime_type()
    }

    /// `Content-Disposition` offering the converted bytes as a download.
    pub fn content_disposition(&self) -> String {
        format!(
            "attachment; filename=converted.{}",
            self.converted_format.as_str()
        )
    }

    /// Response headers an HTTP layer should attach to the converted body.
    pub fn response_headers(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Content-Type", self.content_type().to_string()),
            ("Content-Disposition", self.content_disposition()),
            ("X-Original-Size", self.original_size_bytes.to_string()),
            ("X-Converted-Size", self.converted_size_bytes.to_string()),
            ("X-Compression-Ratio", self.compression_ratio.to_string()),
        ]
    }
}

/// Encoded bytes plus the metadata describing them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub bytes: Vec<u8>,
    pub metadata: ConversionMetadata,
}

impl ConversionResult {
    pub fn into_parts(self) -> (Vec<u8>, ConversionMetadata) {
        (self.bytes, self.metadata)
    }
}
