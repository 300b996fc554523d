use crate::html::escape_text;
use crate::node::Element;
use crate::selector::Selector;
use placard_style::StyleMap;

/// A page: the global custom-property scope (`:root`), the page's style
/// rules, and the body tree that contains the preview.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub title: String,
    /// Inline style of the document element; holds the theme variables.
    pub root_style: StyleMap,
    /// Style rules in the order they would appear in `document.styleSheets`.
    pub stylesheets: Vec<String>,
    pub body: Element,
}

impl Document {
    pub fn new(title: &str, body: Element) -> Self {
        Self {
            title: title.to_string(),
            root_style: StyleMap::new(),
            stylesheets: Vec::new(),
            body,
        }
    }

    pub fn with_stylesheet(mut self, css: &str) -> Self {
        self.stylesheets.push(css.to_string());
        self
    }

    pub fn query(&self, selector: &Selector) -> Option<&Element> {
        self.body.find(selector)
    }

    pub fn query_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        self.body.find_mut(selector)
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    /// All style rules plus the root variables as one stylesheet text.
    pub fn collected_styles(&self) -> String {
        let mut rules = self.stylesheets.clone();
        if !self.root_style.is_empty() {
            rules.push(self.root_style.to_rule(":root"));
        }
        rules.join("\n")
    }

    pub fn to_html(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{}</title>\n<style>\n{}\n</style>\n</head>\n{}\n</html>\n",
            escape_text(&self.title),
            self.collected_styles(),
            self.body.to_html()
        )
    }
}
