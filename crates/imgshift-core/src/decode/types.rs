//! Core types for image decoding.

use image::{DynamicImage, ImageFormat};
use serde::{Deserialize, Serialize};

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if this orientation swaps width and height dimensions.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Container format detected from the input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Png,
    Jpeg,
    WebP,
    Bmp,
    Tiff,
    Gif,
    /// Decodable by the image crate but outside the advertised input set.
    Unknown,
}

impl SourceFormat {
    /// Lowercase format name as reported in conversion metadata.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceFormat::Png => "png",
            SourceFormat::Jpeg => "jpeg",
            SourceFormat::WebP => "webp",
            SourceFormat::Bmp => "bmp",
            SourceFormat::Tiff => "tiff",
            SourceFormat::Gif => "gif",
            SourceFormat::Unknown => "unknown",
        }
    }
}

impl From<ImageFormat> for SourceFormat {
    fn from(format: ImageFormat) -> Self {
        match format {
            ImageFormat::Png => SourceFormat::Png,
            ImageFormat::Jpeg => SourceFormat::Jpeg,
            ImageFormat::WebP => SourceFormat::WebP,
            ImageFormat::Bmp => SourceFormat::Bmp,
            ImageFormat::Tiff => SourceFormat::Tiff,
            ImageFormat::Gif => SourceFormat::Gif,
            _ => SourceFormat::Unknown,
        }
    }
}

/// A decoded, upright image together with what was learned about its source.
///
/// Lives only for the duration of one conversion call.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
    format: SourceFormat,
    byte_len: usize,
    orientation: Orientation,
}

impl DecodedImage {
    /// Wrap already-oriented pixels.
    pub fn new(
        image: DynamicImage,
        format: SourceFormat,
        byte_len: usize,
        orientation: Orientation,
    ) -> Self {
        Self {
            image,
            format,
            byte_len,
            orientation,
        }
    }

    /// Image width in pixels, after orientation correction.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels, after orientation correction.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Whether the pixel buffer carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        self.image.color().has_alpha()
    }

    /// Format detected from the input bytes.
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Length of the raw input, in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// EXIF orientation that was applied to the pixels.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Replace the pixels, keeping the source description.
    pub fn with_image(self, image: DynamicImage) -> Self {
        Self { image, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_orientation_swaps_dimensions() {
        assert!(!Orientation::Normal.swaps_dimensions());
        assert!(!Orientation::FlipHorizontal.swaps_dimensions());
        assert!(!Orientation::Rotate180.swaps_dimensions());
        assert!(!Orientation::FlipVertical.swaps_dimensions());

        assert!(Orientation::Transpose.swaps_dimensions());
        assert!(Orientation::Rotate90CW.swaps_dimensions());
        assert!(Orientation::Transverse.swaps_dimensions());
        assert!(Orientation::Rotate270CW.swaps_dimensions());
    }

    #[test]
    fn test_source_format_from_image_format() {
        assert_eq!(SourceFormat::from(ImageFormat::Png), SourceFormat::Png);
        assert_eq!(SourceFormat::from(ImageFormat::Tiff).as_str(), "tiff");
        assert_eq!(SourceFormat::from(ImageFormat::Ico), SourceFormat::Unknown);
        assert_eq!(SourceFormat::Unknown.as_str(), "unknown");
    }

    #[test]
    fn test_decoded_image_accessors() {
        let img = DynamicImage::new_rgba8(100, 50);
        let decoded = DecodedImage::new(img, SourceFormat::Png, 1234, Orientation::Normal);

        assert_eq!(decoded.dimensions(), (100, 50));
        assert!(decoded.has_alpha());
        assert_eq!(decoded.format(), SourceFormat::Png);
        assert_eq!(decoded.byte_len(), 1234);

        let replaced = decoded.with_image(DynamicImage::new_rgb8(10, 5));
        assert_eq!(replaced.dimensions(), (10, 5));
        assert!(!replaced.has_alpha());
        assert_eq!(replaced.byte_len(), 1234);
    }
}
