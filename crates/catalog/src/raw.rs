//! Loose catalog schema and its normalization into strict descriptors.

use crate::descriptor::{Arrangement, ColorTheme, LayoutDescriptor, Preset, TemplateDescriptor};
use crate::effect::Effect;
use crate::error::CatalogError;
use indexmap::IndexMap;
use placard_style::{FontStack, StyleMap};
use placard_types::{LayoutId, Palette, PresetId, TemplateId, ThemeId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawEffects {
    Flags(IndexMap<String, bool>),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawTemplate {
    name: Option<String>,
    fonts: Option<OneOrMany>,
    font: Option<String>,
    colors: Option<Palette>,
    #[serde(alias = "baseStyles")]
    styles: Option<StyleMap>,
    effects: Option<RawEffects>,
    #[serde(default)]
    premium: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawLayout {
    name: Option<String>,
    class_name: Option<String>,
    description: Option<String>,
    arrangement: Option<Arrangement>,
    #[serde(default)]
    premium: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTheme {
    id: String,
    name: Option<String>,
    colors: Palette,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPreset {
    title: String,
    content: String,
    signer_name: Option<String>,
    signer_title: Option<String>,
    notice_type: Option<String>,
    template: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCatalog {
    #[serde(default)]
    pub templates: IndexMap<String, RawTemplate>,
    #[serde(default)]
    pub layouts: IndexMap<String, RawLayout>,
    #[serde(default, alias = "colorThemes")]
    pub themes: Vec<RawTheme>,
    #[serde(default, alias = "templatePresets")]
    pub presets: IndexMap<String, RawPreset>,
}

fn validate_id(registry: &'static str, id: &str) -> Result<(), CatalogError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(CatalogError::invalid(registry, id, "ids must be lowercase ascii, digits, '-' or '_'"))
    }
}

/// `navy-gold` -> `Navy Gold`
fn display_name(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl RawTemplate {
    pub(crate) fn normalize(self, id: &str) -> Result<TemplateDescriptor, CatalogError> {
        validate_id("template", id)?;

        let mut families: Vec<String> = match self.fonts {
            Some(OneOrMany::One(f)) => vec![f],
            Some(OneOrMany::Many(list)) => list,
            None => Vec::new(),
        };
        families.extend(self.font);
        let fonts = FontStack::new(&families).ok_or_else(|| {
            CatalogError::invalid("template", id, "at least one font family is required")
        })?;
        if families.len() > FontStack::MAX_FAMILIES {
            log::warn!(
                "Template '{}' lists {} fonts; extra families are ignored",
                id,
                families.len()
            );
        }

        let colors = self
            .colors
            .ok_or_else(|| CatalogError::invalid("template", id, "a color triple is required"))?;

        let effects = match self.effects {
            None => Vec::new(),
            Some(RawEffects::Flags(flags)) => flags
                .into_iter()
                .filter(|(_, on)| *on)
                .map(|(flag, _)| flag)
                .map(|flag| effect_for(id, &flag))
                .collect::<Result<_, _>>()?,
            Some(RawEffects::List(flags)) => flags
                .iter()
                .map(|flag| effect_for(id, flag))
                .collect::<Result<_, _>>()?,
        };

        Ok(TemplateDescriptor {
            id: TemplateId::new(id),
            name: non_empty(self.name).unwrap_or_else(|| display_name(id)),
            fonts,
            colors,
            base_styles: self.styles.unwrap_or_default(),
            effects,
            premium: self.premium,
        })
    }
}

fn effect_for(template: &str, flag: &str) -> Result<Effect, CatalogError> {
    Effect::from_flag(flag).ok_or_else(|| CatalogError::UnknownEffect {
        template: template.to_string(),
        flag: flag.to_string(),
    })
}

impl RawLayout {
    pub(crate) fn normalize(self, id: &str) -> Result<LayoutDescriptor, CatalogError> {
        validate_id("layout", id)?;
        let class_name = match self.class_name {
            Some(name) => name.trim().to_string(),
            None if id == LayoutId::DEFAULT => String::new(),
            None => format!("layout-{}", id),
        };
        if class_name.chars().any(char::is_whitespace) {
            return Err(CatalogError::invalid(
                "layout",
                id,
                "class name must be a single CSS class",
            ));
        }
        Ok(LayoutDescriptor {
            id: LayoutId::new(id),
            name: non_empty(self.name).unwrap_or_else(|| display_name(id)),
            class_name,
            description: non_empty(self.description),
            arrangement: self.arrangement.unwrap_or_default(),
            premium: self.premium,
        })
    }
}

impl RawTheme {
    pub(crate) fn normalize(self) -> Result<ColorTheme, CatalogError> {
        validate_id("theme", &self.id)?;
        Ok(ColorTheme {
            name: non_empty(self.name).unwrap_or_else(|| display_name(&self.id)),
            id: ThemeId::new(self.id),
            colors: self.colors,
        })
    }
}

impl RawPreset {
    pub(crate) fn normalize(self, id: &str) -> Result<Preset, CatalogError> {
        validate_id("preset", id)?;
        if self.title.trim().is_empty() {
            return Err(CatalogError::invalid("preset", id, "title must not be empty"));
        }
        Ok(Preset {
            id: PresetId::new(id),
            title: self.title,
            content: self.content,
            signer_name: non_empty(self.signer_name),
            signer_title: non_empty(self.signer_title),
            notice_type: non_empty(self.notice_type).map(|t| t.to_uppercase()),
            template: non_empty(self.template).map(TemplateId::new),
        })
    }
}
