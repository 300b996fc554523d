//! Page formats used when a captured preview is laid onto a printable page.
use serde::{de, ser::SerializeMap, Deserialize, Deserializer, Serialize, Serializer};

/// Points per millimetre (72 / 25.4).
pub const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// A page format. Named formats are portrait; `Custom` dimensions are in millimetres.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::A4 => serializer.serialize_str("A4"),
            PageSize::Letter => serializer.serialize_str("Letter"),
            PageSize::Legal => serializer.serialize_str("Legal"),
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
        }
    }
}

impl PageSize {
    /// Portrait width and height in millimetres.
    pub fn dimensions_mm(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    /// Width and height in millimetres after applying the orientation.
    pub fn oriented_mm(&self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w.min(h), w.max(h)),
            Orientation::Landscape => (w.max(h), w.min(h)),
        }
    }

    /// Width and height in PDF points after applying the orientation.
    pub fn oriented_pt(&self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.oriented_mm(orientation);
        (mm_to_pt(w), mm_to_pt(h))
    }

    /// Parse a page size name (e.g., "A4", "Letter", "Legal")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "a4" => Ok(PageSize::A4),
            "letter" => Ok(PageSize::Letter),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl<'de> Deserialize<'de> for PageSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum PageSizeDef {
            Str(String),
            Map { width: f32, height: f32 },
        }

        match PageSizeDef::deserialize(deserializer)? {
            PageSizeDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            PageSizeDef::Map { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}
