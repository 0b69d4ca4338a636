//! Format listing bindings.

use wasm_bindgen::prelude::*;

/// Supported output and input formats.
///
/// Returns `{ supported_formats: string[], input_formats: string[] }`.
#[wasm_bindgen]
pub fn supported_formats() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&imgshift_core::supported_formats())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize formats: {}", e)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_supported_formats_shape() {
        let value = supported_formats().unwrap();
        let outputs =
            js_sys::Reflect::get(&value, &JsValue::from_str("supported_formats")).unwrap();
        let outputs = js_sys::Array::from(&outputs);
        assert_eq!(outputs.length(), 4);
        assert_eq!(outputs.get(0).as_string().as_deref(), Some("webp"));
    }
}
