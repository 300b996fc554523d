use crate::effect::Effect;
use placard_style::{FontStack, StyleMap};
use placard_types::{LayoutId, Palette, PresetId, TemplateId, ThemeId};
use serde::{Deserialize, Serialize};

/// A named bundle of fonts, colors, base styles and effects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub name: String,
    pub fonts: FontStack,
    pub colors: Palette,
    pub base_styles: StyleMap,
    pub effects: Vec<Effect>,
    pub premium: bool,
}

impl TemplateDescriptor {
    /// The class that marks the preview root while this template is active.
    pub fn class_name(&self) -> String {
        format!("template-{}", self.id)
    }
}

/// How a layout arranges the content paragraphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrangement {
    /// One paragraph element per paragraph.
    #[default]
    Flow,
    /// Paragraphs split across two columns.
    Columns,
    /// Each paragraph in its own grid cell.
    Grid,
    /// The first paragraph set apart as a lead.
    Hero,
}

impl Arrangement {
    /// Whether the layout rebuilds the content subtree into something other
    /// than a flat run of paragraphs.
    pub fn restructures(&self) -> bool {
        !matches!(self, Arrangement::Flow)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDescriptor {
    pub id: LayoutId,
    pub name: String,
    /// Empty for the default layout.
    pub class_name: String,
    pub description: Option<String>,
    pub arrangement: Arrangement,
    pub premium: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    pub id: ThemeId,
    pub name: String,
    pub colors: Palette,
}

/// Canned form content for a common announcement type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: PresetId,
    pub title: String,
    pub content: String,
    pub signer_name: Option<String>,
    pub signer_title: Option<String>,
    pub notice_type: Option<String>,
    pub template: Option<TemplateId>,
}
