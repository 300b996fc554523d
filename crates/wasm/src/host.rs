//! Browser implementations of the studio's host collaborators.

use placard_traits::{DeliveryError, Download, DownloadSink, Notifier, PrintTarget, Toast};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url, Window};

fn window() -> Result<Window, DeliveryError> {
    web_sys::window().ok_or_else(|| DeliveryError::Io("no window available".to_string()))
}

fn document() -> Result<Document, DeliveryError> {
    window()?
        .document()
        .ok_or_else(|| DeliveryError::Io("no document available".to_string()))
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Saves downloads through a temporary object URL and a clicked anchor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloads;

impl DownloadSink for BrowserDownloads {
    fn deliver(&self, download: Download) -> Result<(), DeliveryError> {
        let failed = |e: JsValue| DeliveryError::Failed {
            filename: download.filename.clone(),
            message: js_message(&e),
        };

        let bytes = js_sys::Uint8Array::from(download.bytes.as_slice());
        let options = BlobPropertyBag::new();
        options.set_type(&download.mime);
        let parts = js_sys::Array::of1(&bytes);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(failed)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(failed)?;

        let anchor: HtmlAnchorElement = document()?
            .create_element("a")
            .map_err(failed)?
            .dyn_into()
            .map_err(|el: web_sys::Element| failed(el.into()))?;
        anchor.set_href(&url);
        anchor.set_download(&download.filename);
        anchor.click();
        Url::revoke_object_url(&url).map_err(failed)?;

        log::debug!("Browser download started: {}", download.filename);
        Ok(())
    }
}

/// Writes the printable document into a new window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrintWindow;

impl PrintTarget for BrowserPrintWindow {
    fn open(&self, html: &str) -> Result<(), DeliveryError> {
        let failed = |e: JsValue| DeliveryError::Failed {
            filename: "print window".to_string(),
            message: js_message(&e),
        };
        let popup = window()?
            .open_with_url_and_target("", "_blank")
            .map_err(failed)?
            .ok_or(DeliveryError::PopupBlocked)?;
        let doc = popup
            .document()
            .ok_or_else(|| DeliveryError::Io("print window has no document".to_string()))?;
        let doc = doc.unchecked_into::<web_sys::HtmlDocument>();
        doc.write(&js_sys::Array::of1(&JsValue::from_str(html))).map_err(failed)?;
        doc.close().map_err(failed)?;
        Ok(())
    }
}

/// Shows toasts in the page's `#toast` element and hides them after their
/// duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, toast: Toast) {
        if toast.is_error() {
            web_sys::console::error_1(&JsValue::from_str(&toast.message));
        }
        let Ok(doc) = document() else { return };
        let Some(element) = doc.get_element_by_id("toast") else {
            log::debug!("No #toast element; dropping '{}'", toast.message);
            return;
        };
        element.set_text_content(Some(&toast.message));
        let classes = element.class_list();
        let kind = if toast.is_error() { "error" } else { "success" };
        classes.remove_2("success", "error").ok();
        classes.add_2("show", kind).ok();

        let hide = Closure::once_into_js(move || {
            element.class_list().remove_1("show").ok();
        });
        if let Ok(win) = window() {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.unchecked_ref(),
                toast.duration_ms as i32,
            )
            .ok();
        }
    }
}
