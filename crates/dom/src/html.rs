//! HTML serialization of the preview tree.

use crate::node::{Element, Node};
use itertools::Itertools;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

impl Element {
    /// Serializes this element and its subtree (the `outerHTML`).
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serializes only the children (the `innerHTML`).
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            out.push_str(&format!(" id=\"{}\"", escape_attribute(id)));
        }
        if !self.classes().is_empty() {
            let classes = self.classes().iter().join(" ");
            out.push_str(&format!(" class=\"{}\"", escape_attribute(&classes)));
        }
        if !self.style.is_empty() {
            out.push_str(&format!(" style=\"{}\"", escape_attribute(&self.style.to_css())));
        }
        for (name, value) in self.attributes() {
            out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

impl Node {
    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::LineBreak => out.push_str("<br>"),
        }
    }
}
