use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the preview can be composed in. Affects date formatting and
/// the script font class applied to the title and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Assamese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Assamese => "assamese",
        }
    }

    /// BCP 47 tag of the locale the date is rendered in.
    pub fn locale_tag(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Assamese => "as-IN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "assamese" | "as" => Ok(Language::Assamese),
            other => Err(format!("Unsupported language: '{}'", other)),
        }
    }
}
