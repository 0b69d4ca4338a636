//! WASM-compatible wrapper types for conversion output.

use imgshift_core::{ConversionMetadata, ConversionResult};
use wasm_bindgen::prelude::*;

/// A finished conversion, as seen from JavaScript.
///
/// # Memory Management
///
/// The encoded bytes live in WASM memory. `bytes()` copies them into a new
/// `Uint8Array`; call it once and keep the result.
#[wasm_bindgen]
pub struct JsConversionResult {
    bytes: Vec<u8>,
    metadata: ConversionMetadata,
}

#[wasm_bindgen]
impl JsConversionResult {
    /// Encoded output bytes as a `Uint8Array` (copied).
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// MIME type of the output, e.g. `image/webp`.
    #[wasm_bindgen(getter)]
    pub fn content_type(&self) -> String {
        self.metadata.content_type().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn content_disposition(&self) -> String {
        self.metadata.content_disposition()
    }

    #[wasm_bindgen(getter)]
    pub fn compression_ratio(&self) -> f64 {
        self.metadata.compression_ratio
    }

    /// Full metadata as a plain JS object.
    pub fn metadata(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.metadata)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize metadata: {}", e)))
    }

    /// Response headers as `[name, value]` pairs, suitable for `new Headers(...)`.
    pub fn headers(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.metadata.response_headers())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize headers: {}", e)))
    }
}

#[cfg(test)]
impl JsConversionResult {
    pub(crate) fn metadata_ref(&self) -> &ConversionMetadata {
        &self.metadata
    }
}

impl From<ConversionResult> for JsConversionResult {
    fn from(result: ConversionResult) -> Self {
        let (bytes, metadata) = result.into_parts();
        Self { bytes, metadata }
    }
}
