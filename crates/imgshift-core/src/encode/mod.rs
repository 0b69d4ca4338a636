//! Image encoding for the conversion pipeline.
//!
//! This module provides functionality for:
//! - Encoding to JPEG with configurable quality (alpha flattened onto white)
//! - Encoding to lossy WebP with configurable quality (alpha preserved)
//! - Encoding to PNG at maximum compression (alpha preserved)
//!
//! Each format takes its own parameter struct; [`EncoderParams`] selects one
//! from an [`OutputFormat`]. Encoding is deterministic: the same image and
//! parameters always produce the same bytes.
//!
//! # Examples
//!
//! ```ignore
//! use imgshift_core::encode::{encode, EncoderParams};
//! use imgshift_core::OutputFormat;
//!
//! let img = image::DynamicImage::new_rgb8(100, 100);
//! let bytes = encode(&img, EncoderParams::for_format(OutputFormat::WebP, 80)).unwrap();
//! println!("Encoded {} bytes", bytes.len());
//! ```

mod jpeg;
mod png;
mod webp;

use image::DynamicImage;

use crate::error::Result;
use crate::options::OutputFormat;

pub use self::jpeg::{encode_jpeg, flatten_onto_white, JpegParams};
pub use self::png::{encode_png, PngParams};
pub use self::webp::{encode_webp, WebpParams};

/// Per-format encoder parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderParams {
    Jpeg(JpegParams),
    WebP(WebpParams),
    Png(PngParams),
}

impl EncoderParams {
    /// Select the parameter set for `format`. `quality` is dropped for PNG.
    pub fn for_format(format: OutputFormat, quality: u8) -> Self {
        match format {
            OutputFormat::Jpeg => EncoderParams::Jpeg(JpegParams { quality }),
            OutputFormat::WebP => EncoderParams::WebP(WebpParams { quality }),
            OutputFormat::Png => EncoderParams::Png(PngParams),
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            EncoderParams::Jpeg(_) => OutputFormat::Jpeg,
            EncoderParams::WebP(_) => OutputFormat::WebP,
            EncoderParams::Png(_) => OutputFormat::Png,
        }
    }

    /// Quality carried by the parameters, if the format has one.
    pub fn quality(&self) -> Option<u8> {
        match self {
            EncoderParams::Jpeg(p) => Some(p.quality),
            EncoderParams::WebP(p) => Some(p.quality),
            EncoderParams::Png(_) => None,
        }
    }
}

/// Encode an image with the given parameters.
pub fn encode(img: &DynamicImage, params: EncoderParams) -> Result<Vec<u8>> {
    log::debug!(
        "Encoding {}x{} {:?} with {:?}",
        img.width(),
        img.height(),
        img.color(),
        params
    );
    match params {
        EncoderParams::Jpeg(p) => encode_jpeg(img, p),
        EncoderParams::WebP(p) => encode_webp(img, p),
        EncoderParams::Png(p) => encode_png(img, p),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
