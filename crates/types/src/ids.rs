//! Newtype wrappers for registry keys
//!
//! These types keep template, layout, theme and preset identifiers from being
//! mixed up at call sites that take several of them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! registry_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

registry_id!(
    /// Key into the template registry (e.g. `standard`, `neon`).
    TemplateId
);
registry_id!(
    /// Key into the layout registry (e.g. `default`, `grid`).
    LayoutId
);
registry_id!(
    /// Key into the color theme registry.
    ThemeId
);
registry_id!(
    /// Key into the preset registry.
    PresetId
);

impl TemplateId {
    pub const DEFAULT: &'static str = "standard";
}

impl LayoutId {
    pub const DEFAULT: &'static str = "default";
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl Default for LayoutId {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn ids_serialize_transparently() {
        let id = TemplateId::new("neon");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"neon\"");
        let back: LayoutId = serde_json::from_str("\"grid\"").unwrap();
        assert_eq!(back, "grid");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(TemplateId::new("formal"), 1);
        assert_eq!(map.get("formal"), Some(&1));
    }
}
