use itertools::Itertools;
use serde::Serialize;

/// The font families a template uses, in role order: heading, body, accent.
///
/// Catalog entries list one to three families; missing roles fall back to the
/// previous one so a single-family template still styles every role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FontStack(Vec<String>);

impl FontStack {
    pub const MAX_FAMILIES: usize = 3;

    /// Returns `None` when no usable family name is given.
    pub fn new<I, S>(families: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let families: Vec<String> = families
            .into_iter()
            .map(|f| f.as_ref().trim().to_string())
            .filter(|f| !f.is_empty())
            .unique()
            .take(Self::MAX_FAMILIES)
            .collect();
        if families.is_empty() { None } else { Some(Self(families)) }
    }

    pub fn families(&self) -> &[String] {
        &self.0
    }

    pub fn heading(&self) -> &str {
        &self.0[0]
    }

    pub fn body(&self) -> &str {
        self.0.get(1).unwrap_or(&self.0[0])
    }

    pub fn accent(&self) -> &str {
        self.0.get(2).map(String::as_str).unwrap_or_else(|| self.body())
    }

    /// A `font-family` value with the family quoted and a generic fallback.
    pub fn css_family(family: &str) -> String {
        let lower = family.to_lowercase();
        let generic = if lower.contains("garamond") || lower.contains("serif") {
            "serif"
        } else if lower.contains("vibes") {
            "cursive"
        } else {
            "sans-serif"
        };
        format!("'{}', {}", family.replace('\'', ""), generic)
    }
}
