use crate::descriptor::{ColorTheme, LayoutDescriptor, Preset, TemplateDescriptor};
use crate::error::CatalogError;
use crate::raw::RawCatalog;
use once_cell::sync::Lazy;
use placard_types::{LayoutId, TemplateId};
use std::collections::HashSet;
use std::sync::Arc;

const BUILTIN_JSON: &str = include_str!("../data/builtin.json");

static BUILTIN: Lazy<Result<Arc<Catalog>, CatalogError>> =
    Lazy::new(|| Catalog::from_json(BUILTIN_JSON).map(Arc::new));

/// The read-only registries the studio draws from.
///
/// Entries keep their source order, which is the order selectors list them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    templates: Vec<TemplateDescriptor>,
    layouts: Vec<LayoutDescriptor>,
    themes: Vec<ColorTheme>,
    presets: Vec<Preset>,
}

impl Catalog {
    /// The catalog shipped with the crate. Parsed once per process.
    pub fn builtin() -> Result<Arc<Catalog>, CatalogError> {
        BUILTIN.clone()
    }

    /// Loads and normalizes a catalog document.
    ///
    /// The catalog must contain the `standard` template and the `default`
    /// layout since unknown ids resolve to them.
    pub fn from_json(json: &str) -> Result<Catalog, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        let templates = raw
            .templates
            .into_iter()
            .map(|(id, entry)| entry.normalize(&id))
            .collect::<Result<Vec<_>, _>>()?;
        let layouts = raw
            .layouts
            .into_iter()
            .map(|(id, entry)| entry.normalize(&id))
            .collect::<Result<Vec<_>, _>>()?;
        let themes = raw
            .themes
            .into_iter()
            .map(|entry| entry.normalize())
            .collect::<Result<Vec<_>, _>>()?;
        let presets = raw
            .presets
            .into_iter()
            .map(|(id, entry)| entry.normalize(&id))
            .collect::<Result<Vec<_>, _>>()?;

        // Keyed registries are unique by construction; themes are a list.
        check_unique("theme", themes.iter().map(|t| t.id.as_str()))?;

        if !templates.iter().any(|t| t.id == TemplateId::DEFAULT) {
            return Err(CatalogError::MissingDefault {
                registry: "template",
                id: TemplateId::DEFAULT.to_string(),
            });
        }
        if !layouts.iter().any(|l| l.id == LayoutId::DEFAULT) {
            return Err(CatalogError::MissingDefault {
                registry: "layout",
                id: LayoutId::DEFAULT.to_string(),
            });
        }
        for preset in &presets {
            if let Some(template) = &preset.template
                && !templates.iter().any(|t| &t.id == template)
            {
                return Err(CatalogError::invalid(
                    "preset",
                    preset.id.as_str(),
                    format!("refers to unknown template '{}'", template),
                ));
            }
        }

        log::debug!(
            "Loaded catalog: {} templates, {} layouts, {} themes, {} presets",
            templates.len(),
            layouts.len(),
            themes.len(),
            presets.len()
        );

        Ok(Catalog { templates, layouts, themes, presets })
    }

    pub fn templates(&self) -> &[TemplateDescriptor] {
        &self.templates
    }

    pub fn layouts(&self) -> &[LayoutDescriptor] {
        &self.layouts
    }

    pub fn themes(&self) -> &[ColorTheme] {
        &self.themes
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn template(&self, id: &str) -> Option<&TemplateDescriptor> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn layout(&self, id: &str) -> Option<&LayoutDescriptor> {
        self.layouts.iter().find(|l| l.id == id)
    }

    pub fn theme(&self, id: &str) -> Option<&ColorTheme> {
        self.themes.iter().find(|t| t.id == id)
    }

    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Looks up a template, falling back to `standard` for unknown ids.
    pub fn resolve_template(&self, id: &str) -> &TemplateDescriptor {
        if let Some(template) = self.template(id) {
            return template;
        }
        log::warn!("Unknown template '{}', falling back to '{}'", id, TemplateId::DEFAULT);
        self.default_template()
    }

    /// Looks up a layout, falling back to `default` for unknown ids.
    pub fn resolve_layout(&self, id: &str) -> &LayoutDescriptor {
        if let Some(layout) = self.layout(id) {
            return layout;
        }
        log::warn!("Unknown layout '{}', falling back to '{}'", id, LayoutId::DEFAULT);
        self.default_layout()
    }

    pub fn default_template(&self) -> &TemplateDescriptor {
        // from_json guarantees the default exists
        self.templates
            .iter()
            .find(|t| t.id == TemplateId::DEFAULT)
            .unwrap_or(&self.templates[0])
    }

    pub fn default_layout(&self) -> &LayoutDescriptor {
        self.layouts
            .iter()
            .find(|l| l.id == LayoutId::DEFAULT)
            .unwrap_or(&self.layouts[0])
    }
}

fn check_unique<'a>(
    registry: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::Duplicate { registry, id: id.to_string() });
        }
    }
    Ok(())
}
