//! PNG encoding at maximum compression effort.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{DynamicImage, ImageEncoder};

use crate::error::{ConvertError, Result};

/// Encoder parameters for PNG output.
///
/// PNG is lossless; there is nothing to tune per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngParams;

/// Encode an image to PNG bytes, preserving alpha.
pub fn encode_png(img: &DynamicImage, _params: PngParams) -> Result<Vec<u8>> {
    // Float buffers (e.g. from TIFF) have no PNG representation
    let converted;
    let img = match img {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            converted = DynamicImage::ImageRgba16(img.to_rgba16());
            &converted
        }
        _ => img,
    };

    let mut buffer = Vec::new();
    PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive)
        .write_image(img.as_bytes(), img.width(), img.height(), img.color().into())
        .map_err(|e| ConvertError::encode("PNG", e))?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbaImage};

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_magic() {
        let png = encode_png(&DynamicImage::new_rgb8(10, 10), PngParams).unwrap();
        assert_eq!(&png[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_encode_png_is_lossless_with_alpha() {
        let src = RgbaImage::from_fn(8, 8, |x, y| {
            image::Rgba([x as u8 * 30, y as u8 * 30, 7, (x * y) as u8])
        });
        let png = encode_png(&DynamicImage::ImageRgba8(src.clone()), PngParams).unwrap();

        let decoded = image::load_from_memory(&png).unwrap();
        assert!(decoded.color().has_alpha());
        assert_eq!(decoded.dimensions(), (8, 8));
        assert_eq!(decoded.to_rgba8(), src);
    }

    #[test]
    fn test_encode_png_float_source() {
        let img = DynamicImage::ImageRgb32F(image::Rgb32FImage::new(4, 4));
        let png = encode_png(&img, PngParams).unwrap();
        assert_eq!(&png[0..8], &PNG_MAGIC);
    }
}
