//! Imgshift Core - Image format conversion library
//!
//! This crate converts an encoded image into WebP, JPEG, or PNG:
//! decode, EXIF orientation, proportional downscale, re-encode, and an
//! optional quality search that fits the output under a byte ceiling.
//!
//! Every call is stateless; a [`Converter`] holds only read-only tuning and
//! can be shared freely. With the `runtime` feature (default), conversions
//! can be dispatched onto tokio's blocking pool with a timeout.

pub mod config;
pub mod converter;
pub mod decode;
pub mod encode;
pub mod error;
pub mod formats;
pub mod options;
pub mod resize;
pub mod result;
pub mod search;
#[cfg(feature = "runtime")]
mod worker;

pub use config::ConverterConfig;
pub use converter::{convert, Converter};
pub use decode::{decode_image, DecodedImage, Orientation, SourceFormat};
pub use encode::{encode, EncoderParams};
pub use error::{ConvertError, Result};
pub use formats::{supported_formats, SupportedFormats};
pub use options::{validate_content_type, ConversionOptions, ConversionRequest, OutputFormat};
pub use resize::{fit_dimensions, resize_to_fit};
pub use result::{ConversionMetadata, ConversionResult};
pub use search::{encode_within_size, quality_schedule, SearchOutcome};
