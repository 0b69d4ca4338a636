//! Conversion bindings.
//!
//! # Example
//!
//! ```typescript
//! import { convert } from '@imgshift/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = convert(bytes, { target_format: 'webp', max_width: 1920, max_size_mb: 0.5 });
//! const blob = new Blob([result.bytes()], { type: result.content_type });
//! ```
//!
//! Errors are thrown as `Error` objects carrying a numeric `status` property
//! (400 for rejected input, 500 for decode or encode failures).

use imgshift_core::{
    ConversionOptions, ConversionRequest, ConversionResult, ConvertError, Converter,
};
use wasm_bindgen::prelude::*;

use crate::types::JsConversionResult;

/// Convert an encoded image.
///
/// # Arguments
///
/// * `bytes` - The source file bytes as a `Uint8Array`
/// * `options` - `{ target_format, max_width?, max_height?, max_size_mb?, quality? }`;
///   camelCase keys are accepted too
///
/// # Errors
///
/// Throws if the options are invalid, the bytes are not a decodable image, or
/// the encoder fails.
#[wasm_bindgen]
pub fn convert(bytes: &[u8], options: JsValue) -> Result<JsConversionResult, JsValue> {
    let request: ConversionRequest = serde_wasm_bindgen::from_value(options).map_err(|e| {
        to_js_error(&ConvertError::InvalidInput(format!("Invalid options: {}", e)))
    })?;

    convert_request(bytes, &request)
        .map(JsConversionResult::from)
        .map_err(|e| to_js_error(&e))
}

/// Validate `request` and run the conversion with the default settings.
pub(crate) fn convert_request(
    bytes: &[u8],
    request: &ConversionRequest,
) -> Result<ConversionResult, ConvertError> {
    let options = ConversionOptions::try_from(request)?;
    Converter::default().convert(bytes, &options)
}

fn to_js_error(err: &ConvertError) -> JsValue {
    log::error!("Conversion failed: {}", err);
    let js_err = js_sys::Error::new(&err.to_string());
    // Reflect::set only fails on frozen or non-object targets
    let _ = js_sys::Reflect::set(
        &js_err,
        &JsValue::from_str("status"),
        &JsValue::from_f64(f64::from(err.http_status())),
    );
    js_err.into()
}
