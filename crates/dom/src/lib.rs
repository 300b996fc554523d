//! Preview Document Tree
//!
//! The in-memory stand-in for the browser DOM subtree the preview lives in.
//! Rendering mutates these nodes; hosts serialize them to HTML or hand them to
//! a rasterizer.

mod document;
mod error;
mod html;
mod node;
mod selector;

pub use document::Document;
pub use error::DomError;
pub use html::{escape_attribute, escape_text};
pub use node::{Element, Node};
pub use selector::Selector;

/// Attribute that marks nodes inserted by template effects.
pub const EFFECT_ATTRIBUTE: &str = "data-effect";
