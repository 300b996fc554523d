//! Ordered CSS declaration maps.
//!
//! A `StyleMap` backs both an element's inline `style` attribute and the custom
//! property scope of the page root. Declarations keep their insertion order so
//! serialized output is stable.

use crate::parsers::{normalize_property_name, parse_declarations, StyleParseError};
use indexmap::IndexMap;
use itertools::Itertools;
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Builds the name of a CSS custom property, e.g. `custom_property("primary-color")`
/// gives `--primary-color`.
pub fn custom_property(name: &str) -> String {
    format!("--{}", name.trim_start_matches('-'))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StyleMap {
    entries: IndexMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses CSS declaration text such as `"padding: 50px; border: 1px solid #eee"`.
    pub fn parse(text: &str) -> Result<Self, StyleParseError> {
        let mut map = Self::new();
        for (property, value) in parse_declarations(text)? {
            map.set(&property, value);
        }
        Ok(map)
    }

    /// Sets a property, replacing an existing value in place. Property names are
    /// normalized, so `boxShadow` and `box-shadow` address the same declaration.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.entries
            .insert(normalize_property_name(property), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .get(&normalize_property_name(property))
            .map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.entries
            .contains_key(&normalize_property_name(property))
    }

    pub fn remove(&mut self, property: &str) -> Option<String> {
        self.entries
            .shift_remove(&normalize_property_name(property))
    }

    /// Copies every declaration of `other` into this map.
    pub fn merge(&mut self, other: &StyleMap) {
        for (property, value) in other.iter() {
            self.set(property, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serializes to inline declaration text (`a: b; c: d`).
    pub fn to_css(&self) -> String {
        self.iter().map(|(p, v)| format!("{}: {}", p, v)).join("; ")
    }

    /// Serializes as a rule block for the given selector.
    pub fn to_rule(&self, selector: &str) -> String {
        if self.is_empty() {
            return format!("{} {{}}", selector);
        }
        let body = self
            .iter()
            .map(|(p, v)| format!("    {}: {};", p, v))
            .join("\n");
        format!("{} {{\n{}\n}}", selector, body)
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (k, v) in iter {
            map.set(k.as_ref(), v);
        }
        map
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StyleMapVisitor;

        impl<'de> Visitor<'de> for StyleMapVisitor {
            type Value = StyleMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of CSS properties or a declaration string")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<StyleMap, E> {
                StyleMap::parse(v).map_err(E::custom)
            }

            fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<StyleMap, A::Error> {
                let entries: IndexMap<String, String> =
                    Deserialize::deserialize(MapAccessDeserializer::new(access))?;
                Ok(entries.into_iter().collect())
            }
        }

        deserializer.deserialize_any(StyleMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place_and_normalizes() {
        let mut map = StyleMap::new();
        map.set("background", "#fff");
        map.set("boxShadow", "none");
        map.set("box-shadow", "0 0 4px black");
        assert_eq!(map.len(), 2);
        assert_eq!(map.to_css(), "background: #fff; box-shadow: 0 0 4px black");
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut map = StyleMap::parse("padding: 50px; border: 1px solid #eee").unwrap();
        assert_eq!(map.remove("padding").as_deref(), Some("50px"));
        assert!(!map.contains("padding"));
        assert_eq!(map.remove("padding"), None);

        let mut map = StyleMap::parse("margin: 0; padding: 2px; color: red").unwrap();
        map.remove("padding");
        assert_eq!(map.to_css(), "margin: 0; color: red");
    }

    #[test]
    fn deserializes_from_object_in_source_order() {
        let json = r##"{"padding": "50px", "backdropFilter": "blur(10px)", "background": "#fff"}"##;
        let map: StyleMap = serde_json::from_str(json).unwrap();
        let props: Vec<_> = map.properties().collect();
        assert_eq!(props, vec!["padding", "backdrop-filter", "background"]);
    }

    #[test]
    fn deserializes_from_declaration_string() {
        let map: StyleMap =
            serde_json::from_str(r#""padding: 60px; border: 1px solid #eeeeee""#).unwrap();
        assert_eq!(map.get("border"), Some("1px solid #eeeeee"));
    }

    #[test]
    fn rule_block() {
        let map: StyleMap = [("--primary-color", "#2a3b4c")].into_iter().collect();
        assert_eq!(map.to_rule(":root"), ":root {\n    --primary-color: #2a3b4c;\n}");
        assert_eq!(custom_property("primary-color-rgb"), "--primary-color-rgb");
    }
}
