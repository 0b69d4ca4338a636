//! Lossy WebP encoding through libwebp.
//!
//! The `image` crate's own WebP encoder is lossless-only, so quality would be
//! ignored; the `webp` crate exposes libwebp's lossy encoder instead.

use image::DynamicImage;

use crate::error::{ConvertError, Result};

/// Encoder parameters for WebP output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebpParams {
    /// Lossy quality (1-100)
    pub quality: u8,
}

/// Encode an image to lossy WebP bytes, preserving alpha.
pub fn encode_webp(img: &DynamicImage, params: WebpParams) -> Result<Vec<u8>> {
    let (width, height) = (img.width(), img.height());

    let mut config = webp::WebPConfig::new()
        .map_err(|_| ConvertError::encode("WebP", "failed to create WebPConfig"))?;
    config.lossless = 0;
    config.quality = f32::from(params.quality.clamp(1, 100));

    let encoded = if img.color().has_alpha() {
        let rgba = img.to_rgba8();
        let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);
        encoder.encode_advanced(&config)
    } else {
        let rgb = img.to_rgb8();
        let encoder = webp::Encoder::from_rgb(rgb.as_raw(), width, height);
        encoder.encode_advanced(&config)
    };
    let memory = encoded.map_err(|e| ConvertError::encode("WebP", format!("{:?}", e)))?;

    Ok(memory.to_vec())
}
