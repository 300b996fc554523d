//! Everything that writes into the preview tree.
//!
//! Rendering always starts from `FormState`, never from what an earlier pass
//! left in the tree, so any sequence of renders converges on the same output
//! for the same state.

pub mod content;
pub mod layout;
pub mod preview;
pub mod template;

pub use content::{paragraph_element, paragraph_texts, split_paragraphs};
pub use layout::apply_layout;
pub use preview::{apply_theme_variables, render_fields};
pub use template::apply_template;
