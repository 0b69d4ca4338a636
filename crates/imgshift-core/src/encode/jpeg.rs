//! JPEG encoding.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder,
//! which writes baseline JPEG with full-resolution (4:4:4) chroma. JPEG has no
//! alpha channel, so transparent sources are composited onto white first.

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage, RgbaImage};

use crate::error::{ConvertError, Result};

/// Encoder parameters for JPEG output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegParams {
    /// JPEG quality (1-100, where 100 is highest quality)
    pub quality: u8,
}

/// Encode an image to JPEG bytes.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
///
/// # Errors
///
/// Returns `ConvertError::EncodeFailure` if the image has a zero dimension or
/// the encoder rejects it.
pub fn encode_jpeg(img: &DynamicImage, params: JpegParams) -> Result<Vec<u8>> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(ConvertError::encode(
            "JPEG",
            format!("invalid dimensions {}x{}", width, height),
        ));
    }

    let rgb = if img.color().has_alpha() {
        flatten_onto_white(&img.to_rgba8())
    } else {
        img.to_rgb8()
    };

    // Clamp quality to valid range (1-100)
    let quality = params.quality.clamp(1, 100);

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| ConvertError::encode("JPEG", e))?;

    Ok(buffer)
}

/// Composite RGBA pixels over an opaque white background.
///
/// The alpha channel is used as the blend mask; the result has no alpha.
pub fn flatten_onto_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        image::Rgb([blend(r, a), blend(g, a), blend(b, a)])
    })
}

#[inline]
fn blend(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (u32::from(channel), u32::from(alpha));
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
