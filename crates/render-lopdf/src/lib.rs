//! PDF assembly using lopdf.
//!
//! Builds a one-page document whose only content is the captured preview,
//! embedded as a Flate-compressed RGB image XObject.

mod assembler;
mod helpers;

pub use assembler::LopdfAssembler;
pub use helpers::{image_xobject, placement_content};
