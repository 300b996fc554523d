//! Rasterizer trait for turning the preview tree into pixels.
//!
//! Rendering CSS is the host's job. In a browser the wasm binding forwards to
//! a canvas capture library; tests and the CLI use [`StaticRasterizer`].

use placard_dom::Element;
use placard_types::Color;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaptureError {
    #[error("Capture failed: {0}")]
    Failed(String),

    #[error("Invalid raster image: expected {expected} bytes of RGBA data, got {actual}")]
    InvalidImage { expected: usize, actual: usize },

    #[error("Raster image has zero width or height")]
    Empty,
}

/// Options passed through to the host's capture implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureOptions {
    /// Device pixel multiplier. 2.0 doubles the preview's CSS size.
    pub scale: f32,
    pub use_cors: bool,
    pub allow_taint: bool,
    /// `None` keeps the capture transparent.
    pub background: Option<Color>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            use_cors: true,
            allow_taint: true,
            background: None,
        }
    }
}

/// Straight (non-premultiplied) 8-bit RGBA pixels, row major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, CaptureError> {
        if width == 0 || height == 0 {
            return Err(CaptureError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(CaptureError::InvalidImage {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self { width, height, rgba })
    }

    /// A single-color image, mostly useful in tests.
    pub fn filled(width: u32, height: u32, pixel: [u8; 4]) -> Result<Self, CaptureError> {
        let count = width as usize * height as usize;
        Self::new(width, height, pixel.repeat(count))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }

    /// Height over width.
    pub fn aspect_ratio(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    pub fn is_opaque(&self) -> bool {
        self.rgba.chunks_exact(4).all(|px| px[3] == u8::MAX)
    }
}

/// Captures a rendered element as a raster image.
pub trait Rasterizer: Debug {
    fn capture(
        &self,
        element: &Element,
        options: &CaptureOptions,
    ) -> Result<RasterImage, CaptureError>;

    /// Returns a human-readable name for this rasterizer (for logging/debugging).
    fn name(&self) -> &'static str;
}

#[derive(Debug)]
struct StaticInner {
    result: Result<RasterImage, CaptureError>,
    captured: RwLock<Vec<Element>>,
}

/// Returns a fixed image (or a fixed error) for every capture and records the
/// elements it was asked to capture.
///
/// Clones share the record, so a test can keep one handle and give the other
/// to the studio.
#[derive(Debug, Clone)]
pub struct StaticRasterizer {
    inner: Arc<StaticInner>,
}

impl StaticRasterizer {
    pub fn new(image: RasterImage) -> Self {
        Self::with_result(Ok(image))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_result(Err(CaptureError::Failed(message.into())))
    }

    fn with_result(result: Result<RasterImage, CaptureError>) -> Self {
        Self {
            inner: Arc::new(StaticInner {
                result,
                captured: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Snapshots of the elements passed to `capture`, oldest first.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn captured(&self) -> Vec<Element> {
        self.inner.captured.read().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Rasterizer for StaticRasterizer {
    fn capture(
        &self,
        element: &Element,
        options: &CaptureOptions,
    ) -> Result<RasterImage, CaptureError> {
        log::debug!("Static capture of <{}> at scale {}", element.tag, options.scale);
        if let Ok(mut captured) = self.inner.captured.write() {
            captured.push(element.clone());
        }
        self.inner.result.clone()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_image_validates_buffer_length() {
        assert!(RasterImage::new(2, 2, vec![0; 16]).is_ok());
        assert_eq!(
            RasterImage::new(2, 2, vec![0; 15]),
            Err(CaptureError::InvalidImage { expected: 16, actual: 15 })
        );
        assert_eq!(RasterImage::new(0, 4, Vec::new()), Err(CaptureError::Empty));
    }

    #[test]
    fn filled_image_reports_opacity() {
        let opaque = RasterImage::filled(3, 2, [10, 20, 30, 255]).unwrap();
        assert!(opaque.is_opaque());
        assert!((opaque.aspect_ratio() - 2.0 / 3.0).abs() < f32::EPSILON);
        let clear = RasterImage::filled(1, 1, [0, 0, 0, 0]).unwrap();
        assert!(!clear.is_opaque());
    }

    #[test]
    fn static_rasterizer_records_captures_across_clones() {
        let rasterizer = StaticRasterizer::new(RasterImage::filled(1, 1, [0; 4]).unwrap());
        let handle = rasterizer.clone();
        let el = Element::new("div").with_class("announcement-preview");
        rasterizer.capture(&el, &CaptureOptions::default()).unwrap();
        assert_eq!(handle.captured().len(), 1);
        assert!(handle.captured()[0].has_class("announcement-preview"));

        let failing = StaticRasterizer::failing("canvas tainted");
        assert_eq!(
            failing.capture(&el, &CaptureOptions::default()),
            Err(CaptureError::Failed("canvas tainted".into()))
        );
    }

    #[test]
    fn capture_options_deserialize_with_defaults() {
        let options: CaptureOptions =
            serde_json::from_str(r##"{"scale": 3.0, "background": "#ffffff"}"##).unwrap();
        assert_eq!(options.scale, 3.0);
        assert!(options.use_cors);
        assert_eq!(options.background, Some(Color::WHITE));
    }
}
