//! Core output abstractions for Placard.
//!
//! This crate provides the pieces every export backend shares:
//! - `DocumentAssembler` trait for turning a captured raster into a document
//! - `PageSpec` and `ImagePlacement` for page geometry
//! - `PrintableRenderer` for the standalone print document
//! - Error types for rendering operations

mod error;
mod page;
mod printable;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use page::{ImagePlacement, PageSpec};
pub use printable::{PrintableContext, PrintableRenderer};
pub use traits::DocumentAssembler;
