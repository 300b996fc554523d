pub mod color;
pub mod ids;
pub mod language;

pub use color::{Color, ColorParseError, Palette};
pub use ids::{LayoutId, PresetId, TemplateId, ThemeId};
pub use language::Language;
