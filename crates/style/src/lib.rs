pub mod declarations;
pub mod dimension;
pub mod font;
pub mod parsers;

pub use declarations::{StyleMap, custom_property};
pub use dimension::{Orientation, PageSize};
pub use font::FontStack;
pub use parsers::{StyleParseError, normalize_property_name, parse_declarations};
