pub mod pdf_assertions;

use chrono::{DateTime, TimeZone, Utc};
use lopdf::Document as LopdfDocument;
use placard::traits::{
    InMemoryDownloads, InMemoryNotifier, InMemoryPrintTarget, RasterImage, StaticRasterizer,
};
use placard::{Studio, StudioConfig, StudioError};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// 2026-10-17 12:00 UTC, so filenames and default dates are stable.
pub fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
}

/// A studio wired to in-memory collaborators, with handles kept for assertions.
pub struct TestStudio {
    pub studio: Studio,
    pub downloads: InMemoryDownloads,
    pub notifier: InMemoryNotifier,
    pub print_target: InMemoryPrintTarget,
    pub rasterizer: StaticRasterizer,
}

impl TestStudio {
    pub fn new() -> Result<Self, StudioError> {
        Self::with_config(StudioConfig::default())
    }

    pub fn with_config(config: StudioConfig) -> Result<Self, StudioError> {
        let capture = RasterImage::filled(300, 400, [42, 59, 76, 255])?;
        Self::with_rasterizer(config, StaticRasterizer::new(capture))
    }

    pub fn with_rasterizer(
        config: StudioConfig,
        rasterizer: StaticRasterizer,
    ) -> Result<Self, StudioError> {
        let downloads = InMemoryDownloads::new();
        let notifier = InMemoryNotifier::new();
        let print_target = InMemoryPrintTarget::new();
        let studio = Studio::builder()
            .with_config(config)
            .with_rasterizer(rasterizer.clone())
            .with_downloads(downloads.clone())
            .with_notifier(notifier.clone())
            .with_print_target(print_target.clone())
            .with_clock(fixed_clock)
            .build()?;
        Ok(Self {
            studio,
            downloads,
            notifier,
            print_target,
            rasterizer,
        })
    }

    /// Message of the most recent toast, or an empty string.
    pub fn last_toast(&self) -> String {
        self.notifier.last().map(|t| t.message).unwrap_or_default()
    }
}

/// Wrapper around an exported PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }
}
