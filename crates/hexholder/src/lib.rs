#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::indexing_slicing)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::suboptimal_flops)]

//! `hexholder`: layout calculator for a hex wrench holder block.
//!
//! Given a set of wrenches and the holder design parameters, computes every
//! hole's diameter and center plus the overall block size, and renders the
//! result as a plain-text report. The same pipeline is exported to
//! JavaScript through `wasm-bindgen`.

pub mod error;
pub mod holder;
pub mod presets;
pub mod report;

use wasm_bindgen::prelude::*;

use crate::error::LayoutError;
use crate::holder::{HolderLayout, LayoutRequest};

/// Initialize the WASM module. Sets up the panic hook for debugging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Compute a holder layout from a `LayoutRequest` object.
///
/// Returns the `HolderLayout` as a `JsValue` via `serde-wasm-bindgen`.
///
/// # Errors
///
/// Returns a descriptive error string if the request is malformed or the
/// layout cannot be computed.
#[allow(clippy::needless_pass_by_value)]
#[wasm_bindgen]
pub fn compute_layout(request: JsValue) -> Result<JsValue, JsValue> {
    let request = decode_request(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let layout = compute_layout_internal(&request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&layout).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Return the default eight-wrench request for callers to edit.
///
/// # Errors
///
/// Returns an error string if the request cannot be serialized.
#[wasm_bindgen]
pub fn default_request() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&LayoutRequest::preset())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute a layout and render it as the plain-text report.
///
/// # Errors
///
/// Returns a descriptive error string if the request is malformed or the
/// layout cannot be computed.
#[allow(clippy::needless_pass_by_value)]
#[wasm_bindgen]
pub fn render_report(request: JsValue) -> Result<String, JsValue> {
    let request = decode_request(request).map_err(|e| JsValue::from_str(&e.to_string()))?;
    render_report_internal(&request).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn decode_request(request: JsValue) -> Result<LayoutRequest, LayoutError> {
    serde_wasm_bindgen::from_value(request).map_err(|e| LayoutError::InvalidRequest(e.to_string()))
}

/// Internal layout logic shared between the wasm export and native tests.
#[doc(hidden)]
pub fn compute_layout_internal(request: &LayoutRequest) -> Result<HolderLayout, LayoutError> {
    request.compute()
}

/// Internal report logic shared between the wasm export and native tests.
#[doc(hidden)]
pub fn render_report_internal(request: &LayoutRequest) -> Result<String, LayoutError> {
    let layout = compute_layout_internal(request)?;
    Ok(report::render_report(&layout))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_default_request_computes() {
        let request = default_request();
        assert!(request.is_ok());
        let Ok(request) = request else {
            return;
        };
        assert!(compute_layout(request).is_ok());
    }
}
