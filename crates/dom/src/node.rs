use crate::selector::Selector;
use placard_style::StyleMap;

/// A node in the preview tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// A run of plain text. Escaped on serialization.
    Text(String),
    /// A `<br>`.
    LineBreak,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Text(t) => out.push_str(t),
            Node::LineBreak => out.push('\n'),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with an id, class list, inline style, attributes and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    classes: Vec<String>,
    pub style: StyleMap,
    attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_ascii_lowercase(), ..Default::default() }
    }

    // --- Builder helpers ---

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::text(text));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    // --- Classes ---

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class unless it is already present. Empty names are ignored.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if !class.is_empty() && !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        before != self.classes.len()
    }

    /// Removes every class for which `predicate` returns true.
    pub fn remove_classes_where(&mut self, predicate: impl Fn(&str) -> bool) {
        self.classes.retain(|c| !predicate(c));
    }

    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // --- Attributes ---

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(k, _)| k == name)?;
        Some(self.attributes.remove(index).1)
    }

    // --- Content ---

    /// Concatenated text of all descendants; line breaks become `\n`.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        self.children.push(Node::text(text));
    }

    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    pub fn prepend(&mut self, child: impl Into<Node>) {
        self.children.insert(0, child.into());
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    // --- Queries ---

    /// Depth-first search including `self`.
    pub fn find(&self, selector: &Selector) -> Option<&Element> {
        if selector.matches(self) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(selector))
    }

    pub fn find_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        if selector.matches(self) {
            return Some(self);
        }
        for child in self.children.iter_mut() {
            if let Node::Element(el) = child
                && let Some(found) = el.find_mut(selector)
            {
                return Some(found);
            }
        }
        None
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&Selector::id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.find_mut(&Selector::id(id))
    }

    /// All matching descendants in document order, including `self`.
    pub fn find_all(&self, selector: &Selector) -> Vec<&Element> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if selector.matches(el) {
                out.push(el);
            }
        });
        out
    }

    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }

    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        visit(self);
        for child in self.children.iter_mut().filter_map(Node::as_element_mut) {
            child.walk_mut(visit);
        }
    }

    /// Detaches every descendant element for which `predicate` holds and
    /// returns how many were removed. `self` is never removed.
    pub fn remove_where(&mut self, predicate: &impl Fn(&Element) -> bool) -> usize {
        let before = self.children.len();
        self.children.retain(|child| match child {
            Node::Element(el) => !predicate(el),
            _ => true,
        });
        let mut removed = before - self.children.len();
        for child in self.children.iter_mut().filter_map(Node::as_element_mut) {
            removed += child.remove_where(predicate);
        }
        removed
    }

    /// Convenience for `remove_where` with a selector.
    pub fn remove_matching(&mut self, selector: &Selector) -> usize {
        self.remove_where(&|el: &Element| selector.matches(el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_class("announcement-preview")
            .with_child(
                Element::new("div")
                    .with_id("announcementContent")
                    .with_child(
                        Element::new("p")
                            .with_text("one")
                            .with_child(Node::LineBreak)
                            .with_text("two"),
                    )
                    .with_child(Element::new("p").with_text("three")),
            )
            .with_child(Element::new("div").with_class("debug-info").with_text("debug"))
    }

    #[test]
    fn finds_by_id_and_class() {
        let root = sample();
        let content = root.find_by_id("announcementContent").unwrap();
        assert_eq!(content.child_elements().count(), 2);
        assert!(root.find(&Selector::class("debug-info")).is_some());
        assert!(root.find(&Selector::class("missing")).is_none());
        assert_eq!(root.find_all(&Selector::Tag("p".into())).len(), 2);
    }

    #[test]
    fn text_content_turns_breaks_into_newlines() {
        let root = sample();
        let content = root.find_by_id("announcementContent").unwrap();
        assert_eq!(content.text_content(), "one\ntwothree");
    }

    #[test]
    fn remove_where_detaches_nested_matches() {
        let mut root = sample();
        assert_eq!(root.remove_matching(&Selector::Tag("p".into())), 2);
        assert_eq!(root.remove_matching(&Selector::class("debug-info")), 1);
        assert_eq!(root.find_by_id("announcementContent").unwrap().children.len(), 0);
    }

    #[test]
    fn class_list_is_a_set() {
        let mut el = Element::new("div");
        el.add_class("template-neon");
        el.add_class("template-neon");
        el.add_class("");
        assert_eq!(el.classes(), &["template-neon"]);
        el.remove_classes_where(|c| c.starts_with("template-"));
        assert!(el.classes().is_empty());
    }

    #[test]
    fn find_mut_allows_editing() {
        let mut root = sample();
        root.find_by_id_mut("announcementContent").unwrap().set_text("replaced");
        assert_eq!(root.find_by_id("announcementContent").unwrap().text_content(), "replaced");
    }
}
