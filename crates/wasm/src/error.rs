//! Error handling for WASM bindings.
//!
//! Converts studio errors into JavaScript `Error` objects carrying a `code`.

use placard_core::{ExportError, StudioError};
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid studio configuration
    Config,
    /// Catalog failed to load
    Catalog,
    /// Unknown template, layout, theme or preset id
    NotFound,
    /// Premium template or layout while premium is disabled
    Premium,
    /// Rejected form value or logo
    InvalidInput,
    /// Saved document could not be applied
    Import,
    /// Another export is still running
    Busy,
    /// Capture, encoding or delivery failed
    Export,
    /// Preview or printable rendering failed
    Render,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Catalog => "CATALOG_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Premium => "PREMIUM_REQUIRED",
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::Import => "IMPORT_ERROR",
            ErrorCode::Busy => "BUSY",
            ErrorCode::Export => "EXPORT_ERROR",
            ErrorCode::Render => "RENDER_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
///
/// Not a wasm_bindgen struct: it converts into a plain JS `Error`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PlacardError {
    code: ErrorCode,
    message: String,
}

impl PlacardError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

impl From<StudioError> for PlacardError {
    fn from(err: StudioError) -> Self {
        let code = match &err {
            StudioError::Config(_) => ErrorCode::Config,
            StudioError::Catalog(_) => ErrorCode::Catalog,
            StudioError::UnknownTemplate(_)
            | StudioError::UnknownLayout(_)
            | StudioError::UnknownTheme(_)
            | StudioError::UnknownPreset(_) => ErrorCode::NotFound,
            StudioError::PremiumRequired { .. } => ErrorCode::Premium,
            StudioError::InvalidField { .. } | StudioError::Logo(_) => ErrorCode::InvalidInput,
            StudioError::Import(_) => ErrorCode::Import,
            StudioError::Export(ExportError::Busy) => ErrorCode::Busy,
            StudioError::Export(_) => ErrorCode::Export,
            StudioError::Render(_) | StudioError::Dom(_) => ErrorCode::Render,
        };
        Self::new(code, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for PlacardError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<serde_json::Error> for PlacardError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::Unknown, err.to_string())
    }
}

impl From<PlacardError> for JsValue {
    fn from(err: PlacardError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(err.code.as_str())).ok();
        js_error.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn studio_errors_map_to_codes() {
        let busy: PlacardError = StudioError::Export(ExportError::Busy).into();
        assert_eq!(busy.code(), ErrorCode::Busy);
        let missing: PlacardError = StudioError::UnknownPreset("x".into()).into();
        assert_eq!(missing.code(), ErrorCode::NotFound);
        assert_eq!(missing.message(), "Unknown preset 'x'");
    }
}
