//! Error types for studio operations.

use placard_catalog::CatalogError;
use placard_dom::DomError;
use placard_render_core::RenderError;
use placard_traits::{CaptureError, DeliveryError};
use thiserror::Error;

/// A saved document that cannot be applied. Form state is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Invalid JSON file: {0}")]
    Json(String),
    #[error("Imported data must be a JSON object")]
    NotAnObject,
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

impl ImportError {
    pub(crate) fn field(field: &str, reason: impl Into<String>) -> Self {
        ImportError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Json(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("An export is already in progress")]
    Busy,
    #[error("Required element not found: {0}")]
    MissingElement(String),
    #[error("No rasterizer is configured for this studio")]
    NoRasterizer,
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),
    #[error("Image encoding failed: {0}")]
    Encode(String),
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        ExportError::Encode(err.to_string())
    }
}

/// The main error enum for all operations on a `Studio`.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("Unknown layout '{0}'")]
    UnknownLayout(String),
    #[error("Unknown color theme '{0}'")]
    UnknownTheme(String),
    #[error("Unknown preset '{0}'")]
    UnknownPreset(String),
    #[error("The {registry} '{id}' requires premium features")]
    PremiumRequired { registry: &'static str, id: String },
    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },
    #[error("Invalid logo: {0}")]
    Logo(String),
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("Document error: {0}")]
    Dom(#[from] DomError),
}

impl StudioError {
    pub(crate) fn field(field: &str, reason: impl Into<String>) -> Self {
        StudioError::InvalidField {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the error came from a second export while one was running.
    pub fn is_busy(&self) -> bool {
        matches!(self, StudioError::Export(ExportError::Busy))
    }
}

impl From<CaptureError> for StudioError {
    fn from(err: CaptureError) -> Self {
        StudioError::Export(err.into())
    }
}

impl From<DeliveryError> for StudioError {
    fn from(err: DeliveryError) -> Self {
        StudioError::Export(err.into())
    }
}
