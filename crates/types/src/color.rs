use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use thiserror::Error;

fn default_one() -> f32 {
    1.0
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Color must start with #, got: {0}")]
    MissingHash(String),
    #[error("Invalid hex color length: expected 3 or 6, got {0}")]
    InvalidLength(usize),
    #[error("Invalid {channel} component in '{input}'")]
    InvalidComponent { channel: &'static str, input: String },
}

/// An sRGB color. Parsed from `#RGB` / `#RRGGBB` strings or `{r, g, b, a}` maps.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value, a: 1.0 }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format).
    pub fn parse_hex(s: &str) -> Result<Color, ColorParseError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidLength(hex.chars().count()));
        }

        let component = |digits: &str, channel: &'static str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::InvalidComponent {
                channel,
                input: s.to_string(),
            })
        };

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = component(&hex[0..1].repeat(2), "red")?;
                let g = component(&hex[1..2].repeat(2), "green")?;
                let b = component(&hex[2..3].repeat(2), "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            6 => {
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Color::rgb(r, g, b))
            }
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }

    /// Lowercase `#rrggbb` form. Alpha is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// The comma separated channel list used by `rgba(var(--x-rgb), a)` rules,
    /// e.g. `"42, 59, 76"`.
    pub fn rgb_components(&self) -> String {
        format!("{}, {}, {}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "rgba({}, {})", self.rgb_components(), self.a)
        }
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8, #[serde(default = "default_one")] a: f32 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

/// The primary/secondary/accent triple every template and theme carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

impl Palette {
    pub fn new(primary: Color, secondary: Color, accent: Color) -> Self {
        Self { primary, secondary, accent }
    }

    /// Role name and color, in the order the preview writes its variables.
    pub fn roles(&self) -> [(&'static str, &Color); 3] {
        [("primary", &self.primary), ("secondary", &self.secondary), ("accent", &self.accent)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::rgb(0x2a, 0x3b, 0x4c),
            secondary: Color::rgb(0xce, 0x8e, 0x2c),
            accent: Color::rgb(0x13, 0x4e, 0x65),
        }
    }
}
