//! Template effects: independent, idempotent decorations of the preview root.

use placard_dom::{EFFECT_ATTRIBUTE, Element};
use serde::Serialize;

/// A decoration a template adds on top of its base styles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    /// A decorative `div.effect-overlay.<class_name>` as the first child.
    Overlay { class_name: String },
    /// An infinite CSS animation on the root.
    Animation { name: String, duration: String },
    /// An extra class on the root.
    Class { class_name: String },
    /// One inline style property on the root.
    Style { property: String, value: String },
}

impl Effect {
    /// Maps a catalog effect flag to its decoration.
    pub fn from_flag(flag: &str) -> Option<Effect> {
        let effect = match flag {
            "glow" => Effect::Style {
                property: "box-shadow".into(),
                value: concat!(
                    "0 0 25px rgba(var(--primary-color-rgb), 0.6), ",
                    "inset 0 0 15px rgba(var(--primary-color-rgb), 0.3)"
                )
                .into(),
            },
            "neonBorder" => Effect::Overlay { class_name: "neon-border".into() },
            "flicker" => Effect::Animation { name: "neon-flicker".into(), duration: "3s".into() },
            "confetti" => Effect::Overlay { class_name: "confetti".into() },
            "paperGrain" => Effect::Overlay { class_name: "paper-grain".into() },
            "sparkles" => Effect::Overlay { class_name: "sparkles".into() },
            "shine" => Effect::Class { class_name: "effect-shine".into() },
            _ => return None,
        };
        Some(effect)
    }

    /// Stable key written to `data-effect` on overlay nodes.
    pub fn key(&self) -> String {
        match self {
            Effect::Overlay { class_name } => format!("overlay:{}", class_name),
            Effect::Animation { name, .. } => format!("animation:{}", name),
            Effect::Class { class_name } => format!("class:{}", class_name),
            Effect::Style { property, .. } => format!("style:{}", property),
        }
    }

    /// Applies the decoration. Applying twice leaves the tree as applying once.
    pub fn apply(&self, root: &mut Element) {
        match self {
            Effect::Overlay { class_name } => {
                let key = self.key();
                let present = root
                    .child_elements()
                    .any(|child| child.attr(EFFECT_ATTRIBUTE) == Some(key.as_str()));
                if !present {
                    root.prepend(
                        Element::new("div")
                            .with_class("effect-overlay")
                            .with_class(class_name)
                            .with_attr(EFFECT_ATTRIBUTE, &key)
                            .with_attr("aria-hidden", "true"),
                    );
                }
            }
            Effect::Animation { name, duration } => {
                root.style.set("animation", format!("{} {} infinite", name, duration));
            }
            Effect::Class { class_name } => root.add_class(class_name),
            Effect::Style { property, value } => root.style.set(property, value.as_str()),
        }
    }

    /// Removes the decoration. Removing an effect that is not applied is a no-op.
    pub fn remove(&self, root: &mut Element) {
        match self {
            Effect::Overlay { .. } => {
                let key = self.key();
                root.remove_where(&|el: &Element| el.attr(EFFECT_ATTRIBUTE) == Some(key.as_str()));
            }
            Effect::Animation { .. } => {
                root.style.remove("animation");
            }
            Effect::Class { class_name } => {
                root.remove_class(class_name);
            }
            Effect::Style { property, .. } => {
                root.style.remove(property);
            }
        }
    }
}

/// Brings `root` from the `previous` effect set to `next`: every previous
/// decoration is removed, stray effect nodes are swept, then `next` is applied.
pub fn reconcile_effects(root: &mut Element, previous: &[Effect], next: &[Effect]) {
    for effect in previous {
        effect.remove(root);
    }
    let swept = root.remove_where(&|el: &Element| el.attr(EFFECT_ATTRIBUTE).is_some());
    if swept > 0 {
        log::debug!("Swept {} untracked effect node(s) from the preview", swept);
    }
    for effect in next {
        effect.apply(root);
    }
}
