//! Imgshift WASM - WebAssembly bindings for imgshift
//!
//! This crate exposes the imgshift-core conversion pipeline to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `convert` - The conversion entry point
//! - `formats` - Supported format listing
//! - `types` - WASM-compatible wrapper for conversion results
//!
//! # Usage
//!
//! ```typescript
//! import init, { convert, supported_formats } from '@imgshift/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = convert(bytes, { target_format: 'jpeg', quality: 80 });
//! console.log(result.metadata());
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod formats;
mod types;

// Re-export public types
pub use convert::convert;
pub use formats::supported_formats;
pub use types::JsConversionResult;

/// Initialize the WASM module (called automatically on load)
///
/// Panics are reported to the browser console, and `log` records at info
/// and above are forwarded to it.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // Err only means a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Change how much pipeline logging reaches the console.
///
/// Accepts `error`, `warn`, `info`, `debug`, `trace` or `off`; anything else
/// is ignored.
#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    if let Some(filter) = parse_level(level) {
        log::set_max_level(filter);
    }
}

fn parse_level(level: &str) -> Option<log::LevelFilter> {
    level.trim().parse().ok()
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
