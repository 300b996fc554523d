//! Export plumbing shared by every capture-based format.
//!
//! An [`ExportScope`] marks the studio busy, shows the loading indicator and
//! hides debug overlays for as long as it lives. Dropping it undoes all three,
//! so cleanup happens on every exit path. When the host captures
//! asynchronously the scope is parked in a [`CaptureTicket`] and resumed when
//! the pixels come back.

use crate::error::ExportError;
use crate::page::{DEBUG_CLASS, HIDDEN_CLASS, LOADING_CLASS};
use chrono::NaiveDate;
use image::{ImageFormat, RgbaImage};
use placard_dom::{Document, Element, Selector};
use placard_traits::RasterImage;
use std::io::Cursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Png,
    Pdf,
}

impl ExportKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Png => "png",
            ExportKind::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportKind::Png => "image/png",
            ExportKind::Pdf => "application/pdf",
        }
    }

    pub(crate) fn success_message(&self) -> &'static str {
        match self {
            ExportKind::Png => "Image downloaded successfully!",
            ExportKind::Pdf => "PDF downloaded successfully!",
        }
    }

    pub(crate) fn failure_message(&self) -> &'static str {
        match self {
            ExportKind::Png => "Error generating image. Please try again.",
            ExportKind::Pdf => "Error generating PDF. Please try again.",
        }
    }
}

/// A capture handed to the host. Exactly one of `complete_capture` or
/// `abort_capture` must be called with it to release the studio.
#[derive(Debug)]
#[must_use = "an unfinished capture keeps the studio busy"]
pub struct CaptureTicket {
    kind: ExportKind,
    hidden_overlays: Vec<Option<String>>,
}

impl CaptureTicket {
    pub fn kind(&self) -> ExportKind {
        self.kind
    }
}

pub(crate) struct ExportScope<'a> {
    page: &'a mut Document,
    in_flight: &'a mut bool,
    hidden_overlays: Vec<Option<String>>,
    armed: bool,
}

impl<'a> ExportScope<'a> {
    pub(crate) fn enter(
        page: &'a mut Document,
        in_flight: &'a mut bool,
    ) -> Result<Self, ExportError> {
        if *in_flight {
            return Err(ExportError::Busy);
        }
        *in_flight = true;
        set_loading(page, true);
        let hidden_overlays = hide_overlays(page);
        Ok(Self { page, in_flight, hidden_overlays, armed: true })
    }

    /// Re-enters a scope parked by [`ExportScope::suspend`].
    pub(crate) fn resume(
        page: &'a mut Document,
        in_flight: &'a mut bool,
        ticket: CaptureTicket,
    ) -> Self {
        Self {
            page,
            in_flight,
            hidden_overlays: ticket.hidden_overlays,
            armed: true,
        }
    }

    /// Parks the scope without cleaning up; the studio stays busy.
    pub(crate) fn suspend(mut self, kind: ExportKind) -> CaptureTicket {
        self.armed = false;
        CaptureTicket {
            kind,
            hidden_overlays: std::mem::take(&mut self.hidden_overlays),
        }
    }

    pub(crate) fn page(&self) -> &Document {
        &*self.page
    }
}

impl Drop for ExportScope<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        restore_overlays(self.page, std::mem::take(&mut self.hidden_overlays));
        set_loading(self.page, false);
        *self.in_flight = false;
    }
}

fn set_loading(page: &mut Document, visible: bool) {
    match page.query_mut(&Selector::class(LOADING_CLASS)) {
        Some(loading) => loading.toggle_class(HIDDEN_CLASS, !visible),
        None => log::debug!("Page has no .{} element", LOADING_CLASS),
    }
}

/// Hides every debug overlay, returning their previous `display` values in
/// document order.
fn hide_overlays(page: &mut Document) -> Vec<Option<String>> {
    let mut previous = Vec::new();
    page.body.walk_mut(&mut |el: &mut Element| {
        if el.has_class(DEBUG_CLASS) {
            previous.push(el.style.get("display").map(str::to_string));
            el.style.set("display", "none");
        }
    });
    previous
}

fn restore_overlays(page: &mut Document, previous: Vec<Option<String>>) {
    let mut previous = previous.into_iter();
    page.body.walk_mut(&mut |el: &mut Element| {
        if el.has_class(DEBUG_CLASS) {
            match previous.next().flatten() {
                Some(display) => el.style.set("display", display),
                None => {
                    el.style.remove("display");
                }
            }
        }
    });
}

/// Encodes a capture as PNG.
pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, ExportError> {
    let buffer = RgbaImage::from_raw(image.width(), image.height(), image.rgba().to_vec())
        .ok_or_else(|| ExportError::Encode("pixel buffer does not match dimensions".to_string()))?;
    let mut bytes = Cursor::new(Vec::new());
    buffer.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Decodes PNG, JPEG or GIF bytes into a capture.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, ExportError> {
    let rgba = image::load_from_memory(bytes)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RasterImage::new(width, height, rgba.into_raw())?)
}

/// `<prefix>-YYYY-MM-DD.<ext>`
pub fn export_filename(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}-{}.{}", prefix, date.format("%Y-%m-%d"), extension)
}
