use crate::error::DomError;
use crate::node::Element;
use std::fmt;
use std::str::FromStr;

/// The small selector subset the renderer needs: `#id`, `.class` or a tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    Id(String),
    Class(String),
    Tag(String),
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Selector::Class(class.into())
    }

    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Id(id) => element.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => element.has_class(class),
            Selector::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Class(class) => write!(f, ".{}", class),
            Selector::Tag(tag) => f.write_str(tag),
        }
    }
}

impl FromStr for Selector {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let valid = |name: &str| {
            !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };
        let selector = if let Some(id) = s.strip_prefix('#') {
            Selector::Id(id.to_string())
        } else if let Some(class) = s.strip_prefix('.') {
            Selector::Class(class.to_string())
        } else {
            Selector::Tag(s.to_string())
        };
        let name = match &selector {
            Selector::Id(n) | Selector::Class(n) | Selector::Tag(n) => n,
        };
        if valid(name) { Ok(selector) } else { Err(DomError::InvalidSelector(s.to_string())) }
    }
}
