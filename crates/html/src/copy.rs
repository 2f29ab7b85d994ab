//! Deep copy of elements and documents
//!
//! Copies share no storage with their source. Appending attributes to one
//! side is never observed on the other.

use crate::types::*;

impl Element {
    /// Independent copy of this element and its whole subtree
    pub fn deep_copy(&self) -> Element {
        match self {
            Element::Tag(tag) => Element::Tag(tag.deep_copy()),
            Element::Text(text) => Element::Text(text.deep_copy()),
            Element::Document(doc) => Element::Document(doc.deep_copy()),
        }
    }
}

impl Document {
    /// Copy every member, preserving order
    pub fn deep_copy(&self) -> Document {
        self.iter().map(Element::deep_copy).collect()
    }
}

impl TagNode {
    pub fn deep_copy(&self) -> TagNode {
        TagNode {
            name: self.name.clone(),
            attributes: self
                .attributes
                .iter()
                .map(|a| Attribute::new(a.key.as_str(), a.value.as_str()))
                .collect(),
            children: self.children.deep_copy(),
        }
    }
}

impl TextNode {
    pub fn deep_copy(&self) -> TextNode {
        TextNode::new(self.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{tag, text};

    #[test]
    fn test_copy_is_equal() {
        let original: Element = crate::tag!("div", crate::tag!("span", text("hi")).id("x"))
            .class("a")
            .into();
        let copy = original.deep_copy();

        assert_eq!(copy, original);
        assert_eq!(copy.to_html(), original.to_html());
    }

    #[test]
    fn test_source_mutation_not_observed() {
        let t = tag("div");
        let c = t.deep_copy();
        let t = t.id("x");

        assert_eq!(c.to_html(), "<div></div>");
        assert_eq!(t.to_html(), r#"<div id="x"></div>"#);
    }

    #[test]
    fn test_copy_mutation_not_observed() {
        let t = tag("div").class("a");
        let c = t.deep_copy().attr("data-x", "1");

        assert_eq!(t.to_html(), r#"<div class="a"></div>"#);
        assert_eq!(c.to_html(), r#"<div class="a" data-x="1"></div>"#);
    }

    #[test]
    fn test_nested_child_independent() {
        let mut source = tag("ul").child(tag("li"));
        let copy = source.deep_copy();

        if let Some(li) = source.children.0[0].as_tag_mut() {
            li.push_attr("class", "active");
        }

        assert_eq!(source.to_html(), r#"<ul><li class="active"></li></ul>"#);
        assert_eq!(copy.to_html(), "<ul><li></li></ul>");
    }

    #[test]
    fn test_copy_keeps_raw_values() {
        let original = TextNode::new("<b> & co");
        let copy = original.deep_copy();

        assert_eq!(copy.value, "<b> & co");
        assert_eq!(copy.to_html(), "&lt;b&gt; &amp; co");
    }

    #[test]
    fn test_document_order_preserved() {
        let doc: Document = ["a", "b", "c"]
            .into_iter()
            .map(|v| Element::from(crate::tag!("p", text(v))))
            .collect();
        let copy = Element::from(doc).deep_copy();

        assert_eq!(copy.to_html(), "<p>a</p><p>b</p><p>c</p>");
    }
}
