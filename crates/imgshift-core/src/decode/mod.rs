//! Image decoding for the conversion pipeline.
//!
//! This module provides functionality for:
//! - Detecting the container format from the leading bytes
//! - Refusing oversized images from their header before allocating pixels
//! - Decoding PNG, JPEG, WebP, BMP, TIFF and GIF (first frame)
//! - Normalizing EXIF orientation so downstream steps see upright pixels
//!
//! All operations are synchronous; callers that must not block dispatch the
//! whole pipeline to a worker (see [`crate::Converter::convert_async`]).

mod reader;
mod types;

#[cfg(test)]
pub(crate) use reader::fixtures;
pub use reader::{apply_orientation, decode_image};
pub use types::{DecodedImage, Orientation, SourceFormat};
