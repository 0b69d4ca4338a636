//! Size-constrained quality search.
//!
//! Re-encodes at decreasing quality until the output fits under a byte
//! ceiling. The ceiling is best effort: when even the floor quality is too
//! large, the floor result is returned anyway.

use image::DynamicImage;

use crate::config::ConverterConfig;
use crate::encode::{encode, EncoderParams};
use crate::error::Result;
use crate::options::OutputFormat;

/// Result of a quality search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Encoded bytes of the returned attempt.
    pub bytes: Vec<u8>,
    /// Quality of the returned attempt; `None` for formats without quality.
    pub quality: Option<u8>,
    /// Number of encode calls made.
    pub attempts: u32,
    /// Whether the returned bytes fit under the ceiling.
    pub within_limit: bool,
}

/// The qualities the search will try, in order.
///
/// Starts at `start` and steps down by `quality_step` while staying at or
/// above `min_quality`. When stepping does not land on the floor, the floor
/// is appended. The schedule never exceeds `max_attempts` entries: if it
/// would, the stepped entries are cut short and the final entry is kept as
/// the last attempt. With `max_attempts == 1` only `start` is tried.
pub fn quality_schedule(start: u8, config: &ConverterConfig) -> Vec<u8> {
    let max_attempts = config.max_attempts.max(1) as usize;
    let step = config.quality_step.max(1);
    let floor = config.min_quality;

    let mut schedule = vec![start];
    let mut quality = start;
    while let Some(next) = quality.checked_sub(step).filter(|q| *q >= floor) {
        schedule.push(next);
        quality = next;
    }
    if quality > floor {
        schedule.push(floor);
    }

    if schedule.len() > max_attempts {
        let last = schedule[schedule.len() - 1];
        schedule.truncate(max_attempts.saturating_sub(1).max(1));
        if max_attempts > 1 {
            schedule.push(last);
        }
    }
    schedule
}

/// Encode `img` at the highest scheduled quality whose output is at most
/// `max_bytes` long.
///
/// PNG output does not depend on quality, so with
/// `config.skip_png_search` set it is encoded once and returned.
pub fn encode_within_size(
    img: &DynamicImage,
    format: OutputFormat,
    start_quality: u8,
    max_bytes: u64,
    config: &ConverterConfig,
) -> Result<SearchOutcome> {
    log::debug!(
        "Optimizing {} output to <= {} bytes, starting at quality {}",
        format,
        max_bytes,
        start_quality
    );

    if !format.supports_quality() && config.skip_png_search {
        let bytes = encode(img, EncoderParams::for_format(format, start_quality))?;
        let within_limit = bytes.len() as u64 <= max_bytes;
        if !within_limit {
            log::warn!(
                "{} output is {} bytes, over the {} byte limit",
                format,
                bytes.len(),
                max_bytes
            );
        }
        return Ok(SearchOutcome {
            bytes,
            quality: None,
            attempts: 1,
            within_limit,
        });
    }

    let schedule = quality_schedule(start_quality, config);
    let mut attempts = 0;
    let mut last = Vec::new();
    let mut last_quality = start_quality;

    for quality in schedule {
        attempts += 1;
        let bytes = encode(img, EncoderParams::for_format(format, quality))?;
        log::debug!("Quality {} produced {} bytes", quality, bytes.len());

        if bytes.len() as u64 <= max_bytes {
            return Ok(SearchOutcome {
                bytes,
                quality: format.supports_quality().then_some(quality),
                attempts,
                within_limit: true,
            });
        }
        last = bytes;
        last_quality = quality;
    }

    log::warn!(
        "Could not fit {} output under {} bytes; returning {} bytes at quality {}",
        format,
        max_bytes,
        last.len(),
        last_quality
    );

    Ok(SearchOutcome {
        bytes: last,
        quality: format.supports_quality().then_some(last_quality),
        attempts,
        within_limit: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::fixtures::noisy_rgb;

    #[test]
    fn test_schedule_from_default_quality() {
        let config = ConverterConfig::default();
        assert_eq!(
            quality_schedule(85, &config),
            vec![85, 75, 65, 55, 45, 35, 25, 15, 10]
        );
    }

    #[test]
    fn test_schedule_from_100_hits_floor_exactly() {
        let config = ConverterConfig::default();
        assert_eq!(
            quality_schedule(100, &config),
            vec![100, 90, 80, 70, 60, 50, 40, 30, 20, 10]
        );
    }

    #[test]
    fn test_schedule_at_or_below_floor() {
        let config = ConverterConfig::default();
        assert_eq!(quality_schedule(10, &config), vec![10]);
        assert_eq!(quality_schedule(5, &config), vec![5]);
        assert_eq!(quality_schedule(12, &config), vec![12, 10]);
    }

    #[test]
    fn test_schedule_respects_max_attempts() {
        let mut config = ConverterConfig::default();
        config.max_attempts = 3;
        // Stepping is cut short so the floor stays within the limit
        assert_eq!(quality_schedule(100, &config), vec![100, 90, 10]);

        config.max_attempts = 1;
        assert_eq!(quality_schedule(100, &config), vec![100]);

        config.max_attempts = 2;
        assert_eq!(quality_schedule(100, &config), vec![100, 10]);
    }

    #[test]
    fn test_schedule_with_low_floor_stays_within_limit() {
        let mut config = ConverterConfig::default();
        config.min_quality = 5;
        let schedule = quality_schedule(100, &config);
        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule.first(), Some(&100));
        assert_eq!(schedule.last(), Some(&5));
    }

    #[test]
    fn test_search_attempts_bounded_by_config() {
        let img = noisy_rgb(48, 48);
        let mut config = ConverterConfig::default();
        config.min_quality = 5;

        let outcome = encode_within_size(&img, OutputFormat::Jpeg, 100, 1, &config).unwrap();
        assert!(outcome.attempts <= config.max_attempts);
        assert_eq!(outcome.attempts, 10);
        assert_eq!(outcome.quality, Some(5));

        config.max_attempts = 3;
        let outcome = encode_within_size(&img, OutputFormat::WebP, 100, 1, &config).unwrap();
        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.quality, Some(5));
    }

    #[test]
    fn test_generous_limit_uses_first_attempt() {
        let img = noisy_rgb(64, 64);
        let config = ConverterConfig::default();

        let outcome =
            encode_within_size(&img, OutputFormat::Jpeg, 85, u64::MAX, &config).unwrap();
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.quality, Some(85));
        assert!(outcome.within_limit);

        let direct = encode(&img, EncoderParams::for_format(OutputFormat::Jpeg, 85)).unwrap();
        assert_eq!(outcome.bytes, direct);
    }

    #[test]
    fn test_impossible_limit_returns_floor() {
        let img = noisy_rgb(64, 64);
        let config = ConverterConfig::default();

        for format in [OutputFormat::Jpeg, OutputFormat::WebP] {
            let outcome = encode_within_size(&img, format, 85, 1, &config).unwrap();
            assert_eq!(outcome.quality, Some(10));
            assert_eq!(outcome.attempts, 9);
            assert!(!outcome.within_limit);

            let floor = encode(&img, EncoderParams::for_format(format, 10)).unwrap();
            assert_eq!(outcome.bytes, floor);
        }
    }

    #[test]
    fn test_finds_highest_fitting_quality() {
        let img = noisy_rgb(96, 96);
        let config = ConverterConfig::default();
        let format = OutputFormat::Jpeg;

        let q95 = encode(&img, EncoderParams::for_format(format, 95)).unwrap();
        let q45 = encode(&img, EncoderParams::for_format(format, 45)).unwrap();
        assert!(q45.len() < q95.len());

        let limit = q45.len() as u64;
        let outcome = encode_within_size(&img, format, 95, limit, &config).unwrap();

        assert!(outcome.within_limit);
        assert!(outcome.bytes.len() as u64 <= limit);
        let chosen = outcome.quality.unwrap();
        assert!(chosen >= 45, "search settled on {} below a fitting quality", chosen);
        // Every higher scheduled quality must have been too large
        for quality in quality_schedule(95, &config).into_iter().filter(|q| *q > chosen) {
            let bytes = encode(&img, EncoderParams::for_format(format, quality)).unwrap();
            assert!(bytes.len() as u64 > limit);
        }
    }

    #[test]
    fn test_png_skips_search() {
        let img = noisy_rgb(32, 32);
        let config = ConverterConfig::default();

        let outcome = encode_within_size(&img, OutputFormat::Png, 85, 1, &config).unwrap();
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.quality, None);
        assert!(!outcome.within_limit);
    }

    #[test]
    fn test_png_search_when_enabled() {
        let img = noisy_rgb(32, 32);
        let mut config = ConverterConfig::default();
        config.skip_png_search = false;

        let outcome = encode_within_size(&img, OutputFormat::Png, 85, 1, &config).unwrap();
        assert_eq!(outcome.attempts, 9);
        assert_eq!(outcome.quality, None);

        // Same bytes either way; only the attempt count differs
        config.skip_png_search = true;
        let skipped = encode_within_size(&img, OutputFormat::Png, 85, 1, &config).unwrap();
        assert_eq!(outcome.bytes, skipped.bytes);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
