//! Writes form fields into the preview and theme colors into the page root.

use crate::config::StudioConfig;
use crate::date::date_line;
use crate::page::{
    ASSAMESE_CLASS, CONTACT_INFO_ID, DATE_ID, DEBUG_CLASS, HAS_IMAGE_CLASS, LOGO_ID,
    NOTICE_TYPE_ID, SIGNER_NAME_ID, SIGNER_TITLE_ID, TITLE_ID, CONTENT_ID, placeholder,
};
use crate::state::FormState;
use placard_dom::{DomError, Element, Selector};
use placard_style::{StyleMap, custom_property};
use placard_types::{Language, Palette};

/// Writes every text field, the logo, the notice label and the language
/// class into `preview`. Content paragraphs are left to `apply_layout`.
pub fn render_fields(
    preview: &mut Element,
    form: &FormState,
    config: &StudioConfig,
) -> Result<(), DomError> {
    set_or_placeholder(preview, TITLE_ID, &form.title, placeholder::TITLE)?;
    set_or_placeholder(preview, SIGNER_NAME_ID, &form.signer_name, placeholder::SIGNER_NAME)?;
    set_or_placeholder(preview, SIGNER_TITLE_ID, &form.signer_title, placeholder::SIGNER_TITLE)?;
    set_or_placeholder(preview, CONTACT_INFO_ID, &form.contact_info, placeholder::CONTACT_INFO)?;

    let date = date_line(&form.date, form.language).unwrap_or_default();
    element(preview, DATE_ID)?.set_text(&date);
    element(preview, NOTICE_TYPE_ID)?.set_text(&form.notice_label());

    let logo = element(preview, LOGO_ID)?;
    match &form.logo_image {
        Some(uri) => {
            logo.children.clear();
            logo.push(Element::new("img").with_attr("src", uri).with_attr("alt", "Logo"));
            logo.add_class(HAS_IMAGE_CLASS);
        }
        None => {
            let text = match form.logo_text.trim() {
                "" => config.default_logo_text.as_str(),
                text => text,
            };
            logo.set_text(text);
            logo.remove_class(HAS_IMAGE_CLASS);
        }
    }

    let assamese = form.language == Language::Assamese;
    for id in [TITLE_ID, CONTENT_ID] {
        element(preview, id)?.toggle_class(ASSAMESE_CLASS, assamese);
    }

    render_debug_overlay(preview, form, config.debug);
    Ok(())
}

/// Sets the page-root color variables and their `-rgb` channel lists.
pub fn apply_theme_variables(root_style: &mut StyleMap, palette: &Palette) {
    for (role, color) in palette.roles() {
        let name = format!("{}-color", role);
        root_style.set(&custom_property(&name), color.to_hex());
        root_style.set(&custom_property(&format!("{}-rgb", name)), color.rgb_components());
    }
}

fn render_debug_overlay(preview: &mut Element, form: &FormState, enabled: bool) {
    preview.remove_matching(&Selector::class(DEBUG_CLASS));
    if enabled {
        preview.push(
            Element::new("div")
                .with_class(DEBUG_CLASS)
                .with_text(&format!("Template: {} | Layout: {}", form.template, form.layout)),
        );
    }
}

fn set_or_placeholder(
    preview: &mut Element,
    id: &str,
    value: &str,
    fallback: &str,
) -> Result<(), DomError> {
    let text = if value.trim().is_empty() { fallback } else { value };
    element(preview, id)?.set_text(text);
    Ok(())
}

fn element<'a>(preview: &'a mut Element, id: &str) -> Result<&'a mut Element, DomError> {
    preview
        .find_by_id_mut(id)
        .ok_or_else(|| DomError::NotFound(format!("#{}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{build_page, preview_selector};
    use chrono::NaiveDate;
    use placard_types::Color;

    fn setup() -> (Element, FormState) {
        let preview = build_page().query(&preview_selector()).cloned().unwrap();
        let form = FormState::new(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap());
        (preview, form)
    }

    fn text(preview: &Element, id: &str) -> String {
        preview.find_by_id(id).unwrap().text_content()
    }

    #[test]
    fn empty_fields_keep_placeholders() {
        let (mut preview, form) = setup();
        render_fields(&mut preview, &form, &StudioConfig::default()).unwrap();
        assert_eq!(text(&preview, TITLE_ID), placeholder::TITLE);
        assert_eq!(text(&preview, SIGNER_NAME_ID), placeholder::SIGNER_NAME);
        assert_eq!(text(&preview, DATE_ID), "Date: October 17, 2026");
        assert_eq!(text(&preview, NOTICE_TYPE_ID), "STANDARD");
        assert_eq!(text(&preview, LOGO_ID), "PA");
    }

    #[test]
    fn filled_fields_replace_placeholders() {
        let (mut preview, mut form) = setup();
        form.title = "Board Meeting".into();
        form.signer_title = "Secretary".into();
        form.logo_text = "BM".into();
        form.notice_type = Some("MEETING".into());
        render_fields(&mut preview, &form, &StudioConfig::default()).unwrap();
        assert_eq!(text(&preview, TITLE_ID), "Board Meeting");
        assert_eq!(text(&preview, SIGNER_TITLE_ID), "Secretary");
        assert_eq!(text(&preview, LOGO_ID), "BM");
        assert_eq!(text(&preview, NOTICE_TYPE_ID), "MEETING");
    }

    #[test]
    fn logo_image_replaces_text() {
        let (mut preview, mut form) = setup();
        form.logo_image = Some("data:image/png;base64,AAAA".into());
        render_fields(&mut preview, &form, &StudioConfig::default()).unwrap();
        let logo = preview.find_by_id(LOGO_ID).unwrap();
        assert!(logo.has_class(HAS_IMAGE_CLASS));
        let img = logo.child_elements().next().unwrap();
        assert_eq!(img.tag, "img");
        assert_eq!(img.attr("alt"), Some("Logo"));

        form.logo_image = None;
        render_fields(&mut preview, &form, &StudioConfig::default()).unwrap();
        let logo = preview.find_by_id(LOGO_ID).unwrap();
        assert!(!logo.has_class(HAS_IMAGE_CLASS));
        assert_eq!(logo.text_content(), "PA");
    }

    #[test]
    fn assamese_toggles_class_and_date() {
        let (mut preview, mut form) = setup();
        form.language = Language::Assamese;
        render_fields(&mut preview, &form, &StudioConfig::default()).unwrap();
        assert!(preview.find_by_id(TITLE_ID).unwrap().has_class(ASSAMESE_CLASS));
        assert!(preview.find_by_id(CONTENT_ID).unwrap().has_class(ASSAMESE_CLASS));
        assert_eq!(text(&preview, DATE_ID), "Date: ১৭ অক্টোবৰ, ২০২৬");

        form.language = Language::English;
        render_fields(&mut preview, &form, &StudioConfig::default()).unwrap();
        assert!(!preview.find_by_id(TITLE_ID).unwrap().has_class(ASSAMESE_CLASS));
    }

    #[test]
    fn debug_overlay_follows_config() {
        let (mut preview, form) = setup();
        let config = StudioConfig { debug: true, ..StudioConfig::default() };
        render_fields(&mut preview, &form, &config).unwrap();
        render_fields(&mut preview, &form, &config).unwrap();
        let overlays = preview.find_all(&Selector::class(DEBUG_CLASS));
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].text_content(), "Template: standard | Layout: default");

        render_fields(&mut preview, &form, &StudioConfig::default()).unwrap();
        assert!(preview.find(&Selector::class(DEBUG_CLASS)).is_none());
    }

    #[test]
    fn theme_variables_carry_rgb_channels() {
        let mut root = StyleMap::new();
        let palette = Palette::new(
            Color::parse_hex("#2a3b4c").unwrap(),
            Color::parse_hex("#abc").unwrap(),
            Color::parse_hex("#134e65").unwrap(),
        );
        apply_theme_variables(&mut root, &palette);
        assert_eq!(root.get("--primary-color"), Some("#2a3b4c"));
        assert_eq!(root.get("--primary-color-rgb"), Some("42, 59, 76"));
        assert_eq!(root.get("--secondary-color"), Some("#aabbcc"));
        assert_eq!(root.get("--accent-color-rgb"), Some("19, 78, 101"));
    }

    #[test]
    fn missing_node_is_an_error() {
        let mut preview = Element::new("div");
        let form = FormState::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(matches!(
            render_fields(&mut preview, &form, &StudioConfig::default()),
            Err(DomError::NotFound(_))
        ));
    }
}
