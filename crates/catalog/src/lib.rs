//! Registries of templates, layouts, color themes and presets.
//!
//! Catalog sources are loose JSON (optional fields, fonts given as one name or
//! a list, styles as a map or declaration text, effects as boolean flags).
//! Everything is normalized into one strict descriptor type per registry when
//! the catalog is loaded; lookups never see malformed entries.

mod descriptor;
mod effect;
mod error;
mod raw;
mod registry;

pub use descriptor::{Arrangement, ColorTheme, LayoutDescriptor, Preset, TemplateDescriptor};
pub use effect::{Effect, reconcile_effects};
pub use error::CatalogError;
pub use registry::Catalog;
