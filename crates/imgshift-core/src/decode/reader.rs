//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodedImage, Orientation, SourceFormat};
use crate::error::{ConvertError, Result};

/// Decode image bytes in any supported container, applying EXIF orientation.
///
/// The header is inspected first so that oversized images are refused before
/// their pixel buffer is allocated.
///
/// # Errors
///
/// Returns `ConvertError::UnsupportedOrCorruptImage` if the bytes are not a
/// recognized image or fail to decode.
/// Returns `ConvertError::ImageTooLarge` if `width * height` exceeds `max_pixels`.
pub fn decode_image(bytes: &[u8], max_pixels: u64) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(ConvertError::UnsupportedOrCorruptImage(
            "empty input".to_string(),
        ));
    }

    let format = image::guess_format(bytes)
        .map_err(|e| ConvertError::UnsupportedOrCorruptImage(e.to_string()))?;

    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| ConvertError::UnsupportedOrCorruptImage(e.to_string()))?;

    if u64::from(width) * u64::from(height) > max_pixels {
        return Err(ConvertError::ImageTooLarge { width, height });
    }

    let img = ImageReader::with_format(Cursor::new(bytes), format)
        .decode()
        .map_err(|e| ConvertError::UnsupportedOrCorruptImage(e.to_string()))?;

    let orientation = extract_orientation(bytes);
    log::debug!(
        "Decoded {:?} {}x{} ({:?}, orientation {:?})",
        format,
        width,
        height,
        img.color(),
        orientation
    );

    let oriented = apply_orientation(img, orientation);

    Ok(DecodedImage::new(
        oriented,
        SourceFormat::from(format),
        bytes.len(),
        orientation,
    ))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Rotate/flip pixels so the image displays upright without its EXIF tag.
pub fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
