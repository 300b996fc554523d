//! Layout application: the layout class on the preview root and the
//! arrangement of the content block.

use super::content::{arrange, split_paragraphs};
use crate::page::{CONTENT_ID, placeholder};
use placard_catalog::{Arrangement, Catalog, LayoutDescriptor};
use placard_dom::Element;

/// Swaps the layout class on `preview` and rebuilds the content block from
/// `content`. Returns `false` when the preview has no content element.
pub fn apply_layout(
    preview: &mut Element,
    catalog: &Catalog,
    layout: &LayoutDescriptor,
    content: &str,
) -> bool {
    preview.remove_classes_where(|class| {
        catalog
            .layouts()
            .iter()
            .any(|l| !l.class_name.is_empty() && l.class_name == class)
    });
    if !layout.class_name.is_empty() {
        preview.add_class(&layout.class_name);
    }

    let Some(block) = preview.find_by_id_mut(CONTENT_ID) else {
        log::warn!("Preview has no #{}; layout '{}' not arranged", CONTENT_ID, layout.id);
        return false;
    };

    let mut paragraphs = split_paragraphs(content);
    if paragraphs.is_empty() {
        paragraphs.push(placeholder::CONTENT.to_string());
    }
    // The placeholder is a single paragraph; arranging it into columns or a
    // grid would leave an empty second column.
    let arrangement = if content.trim().is_empty() {
        Arrangement::Flow
    } else {
        layout.arrangement
    };
    arrange(block, &paragraphs, arrangement);
    true
}
