//! Advertised input and output formats.

use serde::Serialize;

/// Format names accepted as `target_format`.
pub const SUPPORTED_OUTPUT_FORMATS: &[&str] = &["webp", "jpeg", "jpg", "png"];

/// Input formats advertised to clients.
pub const INPUT_FORMATS: &[&str] = &["webp", "jpeg", "jpg", "png", "bmp", "tiff"];

/// The static format listing a read-only endpoint reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedFormats {
    pub supported_formats: &'static [&'static str],
    pub input_formats: &'static [&'static str],
}

pub fn supported_formats() -> SupportedFormats {
    SupportedFormats {
        supported_formats: SUPPORTED_OUTPUT_FORMATS,
        input_formats: INPUT_FORMATS,
    }
}
