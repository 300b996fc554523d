//! WebAssembly bindings for the Placard announcement studio.
//!
//! The studio core renders into an in-memory page. JavaScript mirrors it into
//! the real DOM with `previewHtml()` / `pageStyles()` and supplies the pixels
//! for image exports, since only the browser can lay out CSS.
//!
//! ## Module Structure
//!
//! - [`studio`] - the `Studio` class
//! - [`host`] - browser download, print-window and toast collaborators
//! - [`error`] - error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { Studio } from '@placard/wasm';
//!
//! await init();
//!
//! const studio = new Studio();
//! studio.loadPreset('meeting');
//! document.querySelector('.preview-container').innerHTML = studio.previewHtml();
//! studio.exportJson();
//! ```
//!
//! Errors are thrown as `Error` objects with a `code` property such as
//! `"BUSY"` or `"IMPORT_ERROR"`.

mod error;
mod host;
mod studio;

pub use error::{ErrorCode, PlacardError};
pub use host::{BrowserDownloads, BrowserNotifier, BrowserPrintWindow};
pub use studio::WasmStudio;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up the panic hook for readable panics in the browser console. Called
/// automatically by wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Get the version of the placard-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
