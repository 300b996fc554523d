//! The JSON save format and atomic import.
//!
//! Exports always write every field. Imports are patches: each recognized key
//! that is present and non-null replaces the form value, everything else is
//! left alone. A patch is fully validated before anything is applied, so a bad
//! file never leaves the form half-imported.

use crate::error::ImportError;
use crate::state::{ColorRole, FormState, parse_date};
use chrono::{DateTime, SecondsFormat, Utc};
use placard_catalog::Catalog;
use placard_types::{Color, Language, LayoutId, Palette, TemplateId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version stamped into saved documents.
pub const FORMAT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A saved announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedDocument {
    pub template: TemplateId,
    pub layout: LayoutId,
    pub language: Language,
    pub title: String,
    pub content: String,
    pub date: String,
    pub signer_name: String,
    pub signer_title: String,
    pub contact_info: String,
    pub logo_text: String,
    pub colors: Palette,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice_type: Option<String>,
    pub export_date: String,
    pub version: String,
}

impl PersistedDocument {
    pub fn from_form(form: &FormState, exported_at: DateTime<Utc>) -> Self {
        Self {
            template: form.template.clone(),
            layout: form.layout.clone(),
            language: form.language,
            title: form.title.clone(),
            content: form.content.clone(),
            date: form.date.clone(),
            signer_name: form.signer_name.clone(),
            signer_title: form.signer_title.clone(),
            contact_info: form.contact_info.clone(),
            logo_text: form.logo_text.clone(),
            colors: form.colors.clone(),
            notice_type: form.notice_type.clone(),
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: FORMAT_VERSION.to_string(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A validated import. `None` means the key was absent or null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportPatch {
    pub template: Option<String>,
    pub layout: Option<String>,
    pub language: Option<Language>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub signer_name: Option<String>,
    pub signer_title: Option<String>,
    pub contact_info: Option<String>,
    pub logo_text: Option<String>,
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub accent: Option<Color>,
    pub notice_type: Option<String>,
}

impl ImportPatch {
    /// Parses and validates a saved document. Unknown keys are ignored.
    pub fn parse(json: &str) -> Result<Self, ImportError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(object) = value else {
            return Err(ImportError::NotAnObject);
        };

        let date = string(&object, "date")?;
        if let Some(date) = &date
            && !date.is_empty()
            && parse_date(date).is_none()
        {
            return Err(ImportError::field("date", format!("expected YYYY-MM-DD, got '{}'", date)));
        }

        let language = string(&object, "language")?
            .map(|s| s.parse::<Language>().map_err(|e| ImportError::field("language", e)))
            .transpose()?;

        let mut patch = ImportPatch {
            template: string(&object, "template")?,
            layout: string(&object, "layout")?,
            language,
            title: string(&object, "title")?,
            content: string(&object, "content")?,
            date,
            signer_name: string(&object, "signerName")?,
            signer_title: string(&object, "signerTitle")?,
            contact_info: string(&object, "contactInfo")?,
            logo_text: string(&object, "logoText")?,
            notice_type: string(&object, "noticeType")?,
            ..Default::default()
        };

        match object.get("colors") {
            None | Some(Value::Null) => {}
            Some(Value::Object(colors)) => {
                for role in [ColorRole::Primary, ColorRole::Secondary, ColorRole::Accent] {
                    let key = format!("colors.{}", role.key());
                    let Some(text) = string(colors, role.key()).map_err(|_| {
                        ImportError::field(&key, "expected a color string")
                    })?
                    else {
                        continue;
                    };
                    let color = Color::parse_hex(&text)
                        .map_err(|e| ImportError::field(&key, e.to_string()))?;
                    match role {
                        ColorRole::Primary => patch.primary = Some(color),
                        ColorRole::Secondary => patch.secondary = Some(color),
                        ColorRole::Accent => patch.accent = Some(color),
                    }
                }
            }
            Some(other) => {
                return Err(ImportError::field(
                    "colors",
                    format!("expected an object, got {}", kind(other)),
                ));
            }
        }

        Ok(patch)
    }

    /// Writes the patch into `form`. Template and layout ids the catalog does
    /// not know (or that are premium while premium is off) fall back to the
    /// defaults. The palette only changes through the document's own `colors`.
    pub fn apply(self, form: &mut FormState, catalog: &Catalog, premium_enabled: bool) {
        if let Some(id) = self.template {
            let template = match catalog.template(&id) {
                Some(t) if premium_enabled || !t.premium => t,
                Some(_) => {
                    log::warn!("Imported template '{}' requires premium; using default", id);
                    catalog.default_template()
                }
                None => catalog.resolve_template(&id),
            };
            form.template = template.id.clone();
            form.notice_type = None;
        }
        if let Some(id) = self.layout {
            let layout = match catalog.layout(&id) {
                Some(l) if premium_enabled || !l.premium => l,
                Some(_) => {
                    log::warn!("Imported layout '{}' requires premium; using default", id);
                    catalog.default_layout()
                }
                None => catalog.resolve_layout(&id),
            };
            form.layout = layout.id.clone();
        }
        if let Some(language) = self.language {
            form.language = language;
        }

        let texts = [
            (&mut form.title, self.title),
            (&mut form.content, self.content),
            (&mut form.date, self.date),
            (&mut form.signer_name, self.signer_name),
            (&mut form.signer_title, self.signer_title),
            (&mut form.contact_info, self.contact_info),
            (&mut form.logo_text, self.logo_text),
        ];
        for (slot, value) in texts {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(color) = self.primary {
            form.colors.primary = color;
        }
        if let Some(color) = self.secondary {
            form.colors.secondary = color;
        }
        if let Some(color) = self.accent {
            form.colors.accent = color;
        }
        if let Some(label) = self.notice_type {
            form.notice_type = (!label.trim().is_empty()).then(|| label.trim().to_uppercase());
        }
    }
}

fn string(object: &Map<String, Value>, key: &str) -> Result<Option<String>, ImportError> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ImportError::field(
            key,
            format!("expected a string, got {}", kind(other)),
        )),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
