//! Seams between the studio and its host.
//!
//! The studio never touches a browser or a filesystem directly. Capturing the
//! preview as pixels, delivering files, opening a print window and showing
//! toasts all go through the traits in this crate, so the same engine runs in
//! wasm, in the CLI and in tests.

pub mod notify;
pub mod output;
pub mod raster;

pub use notify::{InMemoryNotifier, LogNotifier, Notifier, Toast, ToastKind};
pub use output::{
    DeliveryError, Download, DownloadSink, InMemoryDownloads, InMemoryPrintTarget, PrintTarget,
};
pub use raster::{CaptureError, CaptureOptions, RasterImage, Rasterizer, StaticRasterizer};
