//! The `Studio` class exposed to JavaScript.

use crate::error::PlacardError;
use crate::host::{BrowserDownloads, BrowserNotifier, BrowserPrintWindow};
use placard_core::traits::{CaptureError, RasterImage};
use placard_core::{CaptureTicket, ColorRole, ExportKind, Field, Language, StudioConfig};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, future_to_promise};

type Inner = Rc<RefCell<placard_core::Studio>>;

/// The announcement studio.
///
/// # Example
///
/// ```javascript
/// const studio = new Studio('{"debug": false}');
/// studio.selectTemplate('formal');
/// studio.setField('title', 'Board Meeting');
/// preview.outerHTML = studio.previewHtml();
///
/// await studio.exportPng(async (html) => {
///   const canvas = await html2canvas(preview, { scale: 2 });
///   return canvas.getContext('2d').getImageData(0, 0, canvas.width, canvas.height);
/// });
/// ```
#[wasm_bindgen(js_name = Studio)]
pub struct WasmStudio {
    inner: Inner,
}

#[wasm_bindgen(js_class = Studio)]
impl WasmStudio {
    /// Create a studio from an optional JSON config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmStudio, JsValue> {
        let config = match config_json {
            Some(json) => StudioConfig::from_json(&json).map_err(PlacardError::from)?,
            None => StudioConfig::default(),
        };
        let studio = placard_core::Studio::builder()
            .with_config(config)
            .with_downloads(BrowserDownloads)
            .with_print_target(BrowserPrintWindow)
            .with_notifier(BrowserNotifier)
            .build()
            .map_err(PlacardError::from)?;
        Ok(Self {
            inner: Rc::new(RefCell::new(studio)),
        })
    }

    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> Result<String, JsValue> {
        Ok(self.inner.borrow().preview_html().map_err(PlacardError::from)?)
    }

    /// Page stylesheet plus the `:root` theme variables.
    #[wasm_bindgen(js_name = pageStyles)]
    pub fn page_styles(&self) -> String {
        self.inner.borrow().page().collected_styles()
    }

    #[wasm_bindgen(js_name = isExporting)]
    pub fn is_exporting(&self) -> bool {
        self.inner.borrow().is_exporting()
    }

    pub fn templates(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.borrow().catalog().templates())
    }

    pub fn layouts(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.borrow().catalog().layouts())
    }

    pub fn themes(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.borrow().catalog().themes())
    }

    pub fn presets(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.borrow().catalog().presets())
    }

    /// The current form as a saved-document object.
    pub fn form(&self) -> Result<JsValue, JsValue> {
        let json = self.inner.borrow().snapshot_json().map_err(PlacardError::from)?;
        let value: serde_json::Value = serde_json::from_str(&json).map_err(PlacardError::from)?;
        to_js(&value)
    }

    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&self, field: &str, value: &str) -> Result<(), JsValue> {
        let field: Field = field.parse().map_err(PlacardError::invalid)?;
        self.run(|s| s.set_field(field, value))
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, role: &str, value: &str) -> Result<(), JsValue> {
        let role: ColorRole = role.parse().map_err(PlacardError::invalid)?;
        self.run(|s| s.set_color(role, value))
    }

    #[wasm_bindgen(js_name = setLanguage)]
    pub fn set_language(&self, language: &str) -> Result<(), JsValue> {
        let language: Language = language.parse().map_err(PlacardError::invalid)?;
        self.run(|s| s.set_language(language))
    }

    #[wasm_bindgen(js_name = selectTemplate)]
    pub fn select_template(&self, id: &str) -> Result<(), JsValue> {
        self.run(|s| s.select_template(id))
    }

    #[wasm_bindgen(js_name = selectLayout)]
    pub fn select_layout(&self, id: &str) -> Result<(), JsValue> {
        self.run(|s| s.select_layout(id))
    }

    #[wasm_bindgen(js_name = applyTheme)]
    pub fn apply_theme(&self, id: &str) -> Result<(), JsValue> {
        self.run(|s| s.apply_theme(id))
    }

    #[wasm_bindgen(js_name = loadPreset)]
    pub fn load_preset(&self, id: &str) -> Result<(), JsValue> {
        self.run(|s| s.load_preset(id))
    }

    #[wasm_bindgen(js_name = uploadLogo)]
    pub fn upload_logo(&self, bytes: &[u8], mime: &str) -> Result<(), JsValue> {
        self.run(|s| s.upload_logo(bytes, mime))
    }

    #[wasm_bindgen(js_name = clearLogo)]
    pub fn clear_logo(&self) -> Result<(), JsValue> {
        self.run(|s| s.clear_logo())
    }

    pub fn reset(&self) -> Result<(), JsValue> {
        self.run(|s| s.reset())
    }

    /// Download the form as JSON. Resolves to the filename.
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        let download = self
            .inner
            .borrow_mut()
            .export_json()
            .map_err(PlacardError::from)?;
        Ok(download.filename)
    }

    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&self, json: &str) -> Result<(), JsValue> {
        self.run(|s| s.import_json(json))
    }

    pub fn print(&self) -> Result<(), JsValue> {
        self.run(|s| s.print())
    }

    #[wasm_bindgen(js_name = printableHtml)]
    pub fn printable_html(&self) -> Result<String, JsValue> {
        Ok(self.inner.borrow().printable_html().map_err(PlacardError::from)?)
    }

    /// Capture via `capture(previewHtml)` and download a PNG. `capture` must
    /// return (or resolve to) an `ImageData`-like `{width, height, data}`.
    /// Resolves to the filename.
    #[wasm_bindgen(js_name = exportPng)]
    pub fn export_png(&self, capture: js_sys::Function) -> js_sys::Promise {
        export_with(self.inner.clone(), ExportKind::Png, capture)
    }

    /// Like `exportPng`, but places the capture on a PDF page.
    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self, capture: js_sys::Function) -> js_sys::Promise {
        export_with(self.inner.clone(), ExportKind::Pdf, capture)
    }
}

impl WasmStudio {
    fn run(
        &self,
        op: impl FnOnce(&mut placard_core::Studio) -> Result<(), placard_core::StudioError>,
    ) -> Result<(), JsValue> {
        let mut studio = self.inner.borrow_mut();
        Ok(op(&mut *studio).map_err(PlacardError::from)?)
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(value).map_err(PlacardError::from)?)
}

fn export_with(inner: Inner, kind: ExportKind, capture: js_sys::Function) -> js_sys::Promise {
    future_to_promise(async move {
        let (ticket, html) = {
            let mut studio = inner.borrow_mut();
            let ticket = studio.begin_capture(kind).map_err(PlacardError::from)?;
            match studio.preview_html() {
                Ok(html) => (ticket, html),
                Err(err) => {
                    let err = studio.abort_capture(ticket, &err.to_string());
                    return Err(PlacardError::from(err).into());
                }
            }
        };

        let captured = match capture.call1(&JsValue::NULL, &JsValue::from_str(&html)) {
            Ok(result) => JsFuture::from(js_sys::Promise::resolve(&result)).await,
            Err(err) => Err(err),
        };
        finish_capture(&inner, ticket, captured)
    })
}

fn finish_capture(
    inner: &Inner,
    ticket: CaptureTicket,
    captured: Result<JsValue, JsValue>,
) -> Result<JsValue, JsValue> {
    let mut studio = inner.borrow_mut();
    let image = captured
        .map_err(|e| describe(&e))
        .and_then(|value| image_from_js(&value).map_err(|e| e.to_string()));
    match image {
        Ok(image) => {
            let download = studio
                .complete_capture(ticket, image)
                .map_err(PlacardError::from)?;
            Ok(JsValue::from_str(&download.filename))
        }
        Err(reason) => Err(PlacardError::from(studio.abort_capture(ticket, &reason)).into()),
    }
}

/// Reads `{width, height, data}` where `data` is RGBA bytes.
fn image_from_js(value: &JsValue) -> Result<RasterImage, CaptureError> {
    let number = |key: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_f64())
            .filter(|n| *n >= 0.0)
            .map(|n| n as u32)
            .ok_or_else(|| CaptureError::Failed(format!("capture result has no numeric '{}'", key)))
    };
    let width = number("width")?;
    let height = number("height")?;
    let data = js_sys::Reflect::get(value, &JsValue::from_str("data"))
        .map_err(|e| CaptureError::Failed(describe(&e)))?;
    let rgba = js_sys::Uint8Array::new(&data).to_vec();
    RasterImage::new(width, height, rgba)
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "capture failed".to_string())
}
