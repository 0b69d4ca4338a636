//! Async entry points that keep conversions off the executor threads.
//!
//! Decode and encode are CPU bound, so both calls hand the work to tokio's
//! blocking pool. A timed-out conversion is abandoned, not cancelled: the
//! blocking task runs to completion and its result is dropped.

use std::time::Duration;

use crate::converter::Converter;
use crate::error::{ConvertError, Result};
use crate::options::ConversionOptions;
use crate::result::ConversionResult;

impl Converter {
    /// Run [`Converter::convert`] on the blocking pool.
    pub async fn convert_async(
        &self,
        bytes: Vec<u8>,
        options: ConversionOptions,
    ) -> Result<ConversionResult> {
        let converter = self.clone();
        tokio::task::spawn_blocking(move || converter.convert(&bytes, &options))
            .await
            .map_err(|e| ConvertError::Worker(format!("conversion task failed: {}", e)))?
    }

    /// Like [`Converter::convert_async`], but gives up after `timeout`.
    pub async fn convert_with_timeout(
        &self,
        bytes: Vec<u8>,
        options: ConversionOptions,
        timeout: Duration,
    ) -> Result<ConversionResult> {
        match tokio::time::timeout(timeout, self.convert_async(bytes, options)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("Conversion exceeded {:?}, abandoning", timeout);
                Err(ConvertError::TimedOut(timeout))
            }
        }
    }
}
