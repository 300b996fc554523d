//! # placard-core
//!
//! Platform-agnostic announcement studio.
//!
//! This crate owns everything between the form and the exported file:
//! - **state**: form fields and the application state object
//! - **page**: the preview page skeleton and its stylesheet
//! - **render**: template, layout and field rendering into the preview tree
//! - **persist**: the JSON save format and atomic import
//! - **export**: capture scopes, PNG/PDF encoding and printable HTML
//! - **studio**: the facade hosts drive, built with `StudioBuilder`
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. Pixels, files, print windows
//! and toasts all go through the collaborator traits in `placard-traits`, so
//! the same studio runs in the browser, the CLI and tests.

// Re-export foundation crates
pub use placard_catalog as catalog;
pub use placard_dom as dom;
pub use placard_render_core as render_core;
pub use placard_style as style;
pub use placard_traits as traits;
pub use placard_types as types;

pub mod config;
pub mod date;
pub mod error;
pub mod export;
pub mod logo;
pub mod page;
pub mod persist;
pub mod render;
pub mod state;
pub mod studio;

pub use config::StudioConfig;
pub use error::{ExportError, ImportError, StudioError};
pub use export::{CaptureTicket, ExportKind};
pub use persist::{ImportPatch, PersistedDocument};
pub use state::{AppState, AppliedTemplate, ColorRole, Field, FormState};
pub use studio::{Studio, StudioBuilder};

// Re-export commonly used types from foundation crates
pub use catalog::{Catalog, CatalogError};
pub use types::{Color, Language, Palette};
