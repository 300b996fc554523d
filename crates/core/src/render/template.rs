//! Template application on the preview root.

use crate::state::AppliedTemplate;
use placard_catalog::{Catalog, TemplateDescriptor, reconcile_effects};
use placard_dom::Element;
use placard_style::FontStack;

/// Replaces whatever template `previous` left on `preview` with `template`.
///
/// Previous effects are removed first so a new template's base styles are
/// never clobbered by the removal of an old effect on the same property.
pub fn apply_template(
    preview: &mut Element,
    catalog: &Catalog,
    template: &TemplateDescriptor,
    previous: Option<&AppliedTemplate>,
) -> AppliedTemplate {
    let previous_effects = previous.map(|p| p.effects.as_slice()).unwrap_or_default();
    reconcile_effects(preview, previous_effects, &[]);

    if let Some(previous) = previous {
        for key in &previous.style_keys {
            preview.style.remove(key);
        }
    }
    preview.remove_classes_where(|class| {
        catalog.templates().iter().any(|t| t.class_name() == class)
    });

    let mut style_keys = Vec::new();
    for (property, value) in template.base_styles.iter() {
        preview.style.set(property, value);
        style_keys.push(property.to_string());
    }
    for (property, value) in template_variables(template) {
        preview.style.set(&property, value);
        style_keys.push(property);
    }
    preview.add_class(&template.class_name());

    for effect in &template.effects {
        effect.apply(preview);
    }

    log::debug!(
        "Applied template '{}' ({} style properties, {} effects)",
        template.id,
        style_keys.len(),
        template.effects.len()
    );

    AppliedTemplate {
        id: template.id.clone(),
        style_keys,
        effects: template.effects.clone(),
    }
}

/// Font and palette custom properties scoped to the preview root.
fn template_variables(template: &TemplateDescriptor) -> Vec<(String, String)> {
    let fonts = &template.fonts;
    let mut vars = vec![
        ("--heading-font".to_string(), FontStack::css_family(fonts.heading())),
        ("--body-font".to_string(), FontStack::css_family(fonts.body())),
        ("--accent-font".to_string(), FontStack::css_family(fonts.accent())),
    ];
    for (role, color) in template.colors.roles() {
        vars.push((format!("--template-{}", role), color.to_hex()));
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_dom::EFFECT_ATTRIBUTE;

    fn preview() -> Element {
        Element::new("div").with_class("announcement-preview")
    }

    #[test]
    fn neon_then_standard_leaves_no_neon_state() {
        let catalog = Catalog::builtin().unwrap();
        let mut root = preview();

        let neon = apply_template(&mut root, &catalog, catalog.template("neon").unwrap(), None);
        assert!(root.has_class("template-neon"));
        assert!(root.style.contains("animation"));
        assert!(root.style.contains("box-shadow"));
        assert_eq!(root.child_elements().filter(|c| c.attr(EFFECT_ATTRIBUTE).is_some()).count(), 1);

        apply_template(&mut root, &catalog, catalog.template("standard").unwrap(), Some(&neon));
        assert!(!root.has_class("template-neon"));
        assert!(root.has_class("template-standard"));
        assert!(!root.style.contains("animation"));
        assert!(!root.style.contains("box-shadow"));
        assert!(!root.style.contains("overflow"));
        assert_eq!(root.style.get("background"), Some("#ffffff"));
        assert!(root.children.is_empty());
    }

    #[test]
    fn reapplying_is_idempotent() {
        let catalog = Catalog::builtin().unwrap();
        let template = catalog.template("festive").unwrap();
        let mut once = preview();
        let first = apply_template(&mut once, &catalog, template, None);
        let mut twice = once.clone();
        apply_template(&mut twice, &catalog, template, Some(&first));
        assert_eq!(once, twice);
    }

    #[test]
    fn base_style_removal_keeps_the_new_templates_values() {
        let catalog = Catalog::builtin().unwrap();
        let mut root = preview();
        let neon = apply_template(&mut root, &catalog, catalog.template("neon").unwrap(), None);
        apply_template(&mut root, &catalog, catalog.template("modern").unwrap(), Some(&neon));
        assert_eq!(root.style.get("box-shadow"), Some("0 20px 40px rgba(0,0,0,0.08)"));
    }

    #[test]
    fn sets_font_and_palette_variables() {
        let catalog = Catalog::builtin().unwrap();
        let mut root = preview();
        let elegant = catalog.template("elegant").unwrap();
        let applied = apply_template(&mut root, &catalog, elegant, None);
        assert_eq!(root.style.get("--heading-font"), Some("'Cormorant Garamond', serif"));
        assert_eq!(root.style.get("--accent-font"), Some("'Great Vibes', cursive"));
        assert_eq!(root.style.get("--template-primary"), Some("#76323f"));
        assert!(applied.style_keys.iter().any(|k| k == "--template-accent"));
    }
}
