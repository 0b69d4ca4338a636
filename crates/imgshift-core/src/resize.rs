//! Proportional downscaling into a bounding box.
//!
//! The scale factor is kept as an exact fraction `num / den` so the bounded
//! edge lands exactly on its bound instead of one pixel short from float
//! rounding.

use image::imageops::FilterType;

use crate::decode::DecodedImage;

/// Exact scale factor `num / den`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scale {
    num: u64,
    den: u64,
}

impl Scale {
    fn is_downscale(self) -> bool {
        self.num < self.den
    }

    fn apply(self, edge: u32) -> u32 {
        let scaled = u64::from(edge) * self.num / self.den;
        // floor can reach zero for 1px edges; never emit a degenerate image
        (scaled as u32).max(1)
    }
}

fn scale_for(
    width: u32,
    height: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Option<Scale> {
    let by_width = max_width.map(|bound| Scale {
        num: u64::from(bound),
        den: u64::from(width),
    });
    let by_height = max_height.map(|bound| Scale {
        num: u64::from(bound),
        den: u64::from(height),
    });

    match (by_width, by_height) {
        // The tighter constraint wins: a/b < c/d  <=>  a*d < c*b
        (Some(w), Some(h)) => Some(if w.num * h.den <= h.num * w.den { w } else { h }),
        (Some(w), None) => Some(w),
        (None, Some(h)) => Some(h),
        (None, None) => None,
    }
}

/// Compute the dimensions an image should be scaled to.
///
/// Returns `None` when no bound is given, the image already fits, or the
/// source has a zero edge. Images are never upscaled.
pub fn fit_dimensions(
    width: u32,
    height: u32,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Option<(u32, u32)> {
    if width == 0 || height == 0 {
        return None;
    }

    let scale = scale_for(width, height, max_width, max_height)?;
    if !scale.is_downscale() {
        return None;
    }

    Some((scale.apply(width), scale.apply(height)))
}

/// Shrink an image to fit within the given bounds, preserving aspect ratio.
///
/// Uses Lanczos3 resampling. Alpha is carried through untouched. The image is
/// returned as-is when [`fit_dimensions`] says no resize is needed.
pub fn resize_to_fit(
    image: DecodedImage,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> DecodedImage {
    let (width, height) = image.dimensions();

    match fit_dimensions(width, height, max_width, max_height) {
        Some((new_width, new_height)) => {
            log::debug!(
                "Resizing image from {}x{} to {}x{}",
                width,
                height,
                new_width,
                new_height
            );
            let resized = image
                .image()
                .resize_exact(new_width, new_height, FilterType::Lanczos3);
            image.with_image(resized)
        }
        None => image,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
