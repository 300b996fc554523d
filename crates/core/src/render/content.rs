//! Paragraph formatting and layout arrangements for the content block.

use itertools::Itertools;
use placard_catalog::Arrangement;
use placard_dom::{Element, Node, Selector};

/// Splits text into paragraphs on blank lines. Lines inside a paragraph are
/// kept with their line breaks; leading and trailing blank lines are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    lines
        .split(|line| line.trim().is_empty())
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.iter().join("\n"))
        .collect()
}

/// A `p` whose internal newlines become `<br>`.
pub fn paragraph_element(text: &str) -> Element {
    let mut p = Element::new("p");
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            p.push(Node::LineBreak);
        }
        if !line.is_empty() {
            p.push(Node::text(line));
        }
    }
    p
}

/// Rebuilds the children of the content element for `arrangement`.
pub fn arrange(content: &mut Element, paragraphs: &[String], arrangement: Arrangement) {
    content.children.clear();
    let mut ps = paragraphs.iter().map(|p| paragraph_element(p));

    match arrangement {
        Arrangement::Flow => content.children.extend(ps.map(Node::from)),
        Arrangement::Columns => {
            let split = paragraphs.len().div_ceil(2);
            let mut first = Element::new("div").with_class("layout-column");
            let mut second = Element::new("div").with_class("layout-column");
            first.children.extend(ps.by_ref().take(split).map(Node::from));
            second.children.extend(ps.map(Node::from));
            content.push(first);
            content.push(second);
        }
        Arrangement::Grid => {
            for p in ps {
                content.push(Element::new("div").with_class("grid-item").with_child(p));
            }
        }
        Arrangement::Hero => {
            if let Some(lead) = ps.next() {
                content.push(Element::new("div").with_class("hero-lead").with_child(lead));
            }
            content.children.extend(ps.map(Node::from));
        }
    }
}

/// Text of every paragraph under `content`, in document order.
pub fn paragraph_texts(content: &Element) -> Vec<String> {
    content
        .find_all(&Selector::Tag("p".to_string()))
        .into_iter()
        .map(Element::text_content)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs() -> Vec<String> {
        split_paragraphs("One\nline two\n\nThree\n\n\nFour\n\nFive")
    }

    #[test]
    fn splits_on_blank_lines_and_keeps_line_breaks() {
        assert_eq!(paragraphs(), vec!["One\nline two", "Three", "Four", "Five"]);
        assert_eq!(split_paragraphs("\n\n  \nOnly\n\n"), vec!["Only"]);
        assert!(split_paragraphs("   ").is_empty());
        assert_eq!(split_paragraphs("a\r\nb\r\n\r\nc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn two_paragraphs_make_two_p_elements_with_breaks() {
        let mut content = Element::new("div");
        arrange(&mut content, &split_paragraphs("Hello\nworld\n\nBye"), Arrangement::Flow);
        let ps: Vec<_> = content.child_elements().collect();
        assert_eq!(ps.len(), 2);
        assert_eq!(ps[0].children, vec![Node::text("Hello"), Node::LineBreak, Node::text("world")]);
        assert_eq!(ps[0].to_html(), "<p>Hello<br>world</p>");
    }

    #[test]
    fn columns_put_the_larger_half_first() {
        let mut content = Element::new("div");
        arrange(&mut content, &paragraphs()[..3], Arrangement::Columns);
        let columns: Vec<_> = content.child_elements().collect();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].child_elements().count(), 2);
        assert_eq!(columns[1].child_elements().count(), 1);
    }

    #[test]
    fn grid_and_hero_wrap_paragraphs() {
        let mut content = Element::new("div");
        arrange(&mut content, &paragraphs(), Arrangement::Grid);
        assert!(content.child_elements().all(|c| c.has_class("grid-item")));
        assert_eq!(content.child_elements().count(), 4);

        arrange(&mut content, &paragraphs(), Arrangement::Hero);
        let first = content.child_elements().next().unwrap();
        assert!(first.has_class("hero-lead"));
        assert_eq!(content.child_elements().count(), 4);
    }

    #[test]
    fn every_arrangement_preserves_paragraph_text() {
        let source = paragraphs();
        let arrangements = [
            Arrangement::Flow,
            Arrangement::Columns,
            Arrangement::Grid,
            Arrangement::Hero,
        ];
        for arrangement in arrangements {
            let mut content = Element::new("div");
            arrange(&mut content, &source, arrangement);
            assert_eq!(paragraph_texts(&content), source, "{:?}", arrangement);
        }
    }
}
