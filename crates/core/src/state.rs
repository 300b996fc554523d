//! Form state and the application state object that owns it.

use chrono::NaiveDate;
use placard_catalog::Effect;
use placard_types::{Color, Language, LayoutId, Palette, TemplateId};
use std::fmt;
use std::str::FromStr;

/// A free-text form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
    Date,
    SignerName,
    SignerTitle,
    ContactInfo,
    LogoText,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Title,
        Field::Content,
        Field::Date,
        Field::SignerName,
        Field::SignerTitle,
        Field::ContactInfo,
        Field::LogoText,
    ];

    /// The key used in saved documents and by hosts.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Date => "date",
            Field::SignerName => "signerName",
            Field::SignerTitle => "signerTitle",
            Field::ContactInfo => "contactInfo",
            Field::LogoText => "logoText",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| format!("Unknown form field: '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Primary,
    Secondary,
    Accent,
}

impl ColorRole {
    pub fn key(&self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::Secondary => "secondary",
            ColorRole::Accent => "accent",
        }
    }

    pub fn slot<'a>(&self, palette: &'a mut Palette) -> &'a mut Color {
        match self {
            ColorRole::Primary => &mut palette.primary,
            ColorRole::Secondary => &mut palette.secondary,
            ColorRole::Accent => &mut palette.accent,
        }
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(ColorRole::Primary),
            "secondary" => Ok(ColorRole::Secondary),
            "accent" => Ok(ColorRole::Accent),
            other => Err(format!("Unknown color role: '{}'", other)),
        }
    }
}

/// Everything the user has entered or selected.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub title: String,
    pub content: String,
    /// `YYYY-MM-DD`, or empty.
    pub date: String,
    pub signer_name: String,
    pub signer_title: String,
    pub contact_info: String,
    pub logo_text: String,
    /// A `data:` URI of an uploaded logo.
    pub logo_image: Option<String>,
    pub template: TemplateId,
    pub layout: LayoutId,
    pub language: Language,
    pub colors: Palette,
    /// Label set by a preset. When absent the template id is shown.
    pub notice_type: Option<String>,
}

impl FormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            signer_name: String::new(),
            signer_title: String::new(),
            contact_info: String::new(),
            logo_text: String::new(),
            logo_image: None,
            template: TemplateId::default(),
            layout: LayoutId::default(),
            language: Language::default(),
            colors: Palette::default(),
            notice_type: None,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
            Field::Date => &self.date,
            Field::SignerName => &self.signer_name,
            Field::SignerTitle => &self.signer_title,
            Field::ContactInfo => &self.contact_info,
            Field::LogoText => &self.logo_text,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
            Field::Date => &mut self.date,
            Field::SignerName => &mut self.signer_name,
            Field::SignerTitle => &mut self.signer_title,
            Field::ContactInfo => &mut self.contact_info,
            Field::LogoText => &mut self.logo_text,
        };
        *slot = value.into();
    }

    /// The date as a calendar day, if it is set and well formed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// The label shown in the notice-type badge.
    pub fn notice_label(&self) -> String {
        match &self.notice_type {
            Some(label) => label.clone(),
            None => self.template.as_str().to_uppercase(),
        }
    }
}

pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// What the last template application left on the preview root, so the next
/// one can undo exactly that.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppliedTemplate {
    pub id: TemplateId,
    /// Inline style properties the template set, custom properties included.
    pub style_keys: Vec<String>,
    pub effects: Vec<Effect>,
}

/// The studio's mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub form: FormState,
    pub applied_template: Option<AppliedTemplate>,
    pub logo_loaded: bool,
    pub export_in_flight: bool,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: FormState::new(today),
            applied_template: None,
            logo_loaded: false,
            export_in_flight: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn defaults_use_standard_template_and_today() {
        let form = FormState::new(today());
        assert_eq!(form.date, "2026-10-17");
        assert_eq!(form.template, "standard");
        assert_eq!(form.layout, "default");
        assert_eq!(form.language, Language::English);
        assert_eq!(form.colors, Palette::default());
        assert_eq!(form.notice_label(), "STANDARD");
    }

    #[test]
    fn fields_round_trip_through_keys() {
        let mut form = FormState::new(today());
        for field in Field::ALL {
            let parsed: Field = field.key().parse().unwrap();
            form.set(parsed, format!("value of {}", field));
            assert_eq!(form.get(field), format!("value of {}", field));
        }
        assert!("nickname".parse::<Field>().is_err());
    }

    #[test]
    fn notice_label_prefers_preset_label() {
        let mut form = FormState::new(today());
        form.notice_type = Some("EVENT".into());
        assert_eq!(form.notice_label(), "EVENT");
    }

    #[test]
    fn parsed_date_rejects_malformed_values() {
        let mut form = FormState::new(today());
        assert_eq!(form.parsed_date(), Some(today()));
        form.date = "17/10/2026".into();
        assert_eq!(form.parsed_date(), None);
    }
}
