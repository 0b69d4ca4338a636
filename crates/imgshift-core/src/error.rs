//! Error taxonomy for the conversion pipeline.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while converting an image.
///
/// Every variant is terminal for the call: the pipeline never retries and
/// never substitutes another output format.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The request was rejected before any decode work.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The bytes could not be decoded as any recognized image format.
    #[error("Unsupported or corrupt image: {0}")]
    UnsupportedOrCorruptImage(String),

    /// The image header declares more pixels than the converter accepts.
    #[error("Image too large: {width}x{height} exceeds the pixel limit")]
    ImageTooLarge { width: u32, height: u32 },

    /// The encoder rejected the image.
    #[error("{format} encoding failed: {reason}")]
    EncodeFailure { format: &'static str, reason: String },

    /// The caller stopped waiting for a dispatched conversion.
    #[error("Conversion timed out after {0:?}")]
    TimedOut(Duration),

    /// The worker running the conversion did not complete.
    #[error("Conversion worker failed: {0}")]
    Worker(String),
}

impl ConvertError {
    /// HTTP status an outer service layer should report for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ConvertError::InvalidInput(_) | ConvertError::ImageTooLarge { .. } => 400,
            ConvertError::TimedOut(_) => 504,
            ConvertError::UnsupportedOrCorruptImage(_)
            | ConvertError::EncodeFailure { .. }
            | ConvertError::Worker(_) => 500,
        }
    }

    /// True when the caller sent something the converter cannot accept.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status())
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ConvertError::InvalidInput(message.into())
    }

    pub(crate) fn encode(format: &'static str, reason: impl ToString) -> Self {
        ConvertError::EncodeFailure {
            format,
            reason: reason.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::InvalidInput("Unsupported format: gif".to_string());
        assert_eq!(err.to_string(), "Invalid input: Unsupported format: gif");

        let err = ConvertError::encode("WebP", "bad color type");
        assert_eq!(err.to_string(), "WebP encoding failed: bad color type");

        let err = ConvertError::ImageTooLarge {
            width: 20000,
            height: 20000,
        };
        assert_eq!(
            err.to_string(),
            "Image too large: 20000x20000 exceeds the pixel limit"
        );
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ConvertError::invalid("x").http_status(), 400);
        assert_eq!(
            ConvertError::ImageTooLarge {
                width: 1,
                height: 1
            }
            .http_status(),
            400
        );
        assert_eq!(
            ConvertError::UnsupportedOrCorruptImage("x".into()).http_status(),
            500
        );
        assert_eq!(ConvertError::encode("PNG", "x").http_status(), 500);
        assert_eq!(ConvertError::Worker("panicked".into()).http_status(), 500);
        assert_eq!(
            ConvertError::TimedOut(Duration::from_secs(1)).http_status(),
            504
        );
    }

    #[test]
    fn test_is_client_error() {
        assert!(ConvertError::invalid("x").is_client_error());
        assert!(!ConvertError::UnsupportedOrCorruptImage("x".into()).is_client_error());
        assert!(!ConvertError::TimedOut(Duration::from_millis(5)).is_client_error());
    }
}
