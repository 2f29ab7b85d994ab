//! HTML serializer - render a tree to markup
//!
//! This module handles:
//! - Entity escaping of text and attribute values
//! - Attribute emission in insertion order
//! - The void-tag exception (no children, no closing tag)
//!
//! Rendering is total: malformed names and keys are written as given.

use std::fmt;

use crate::types::*;

/// Escape `&`, `<`, `>`, `"` and `'` into HTML entities
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    escape_into(text, &mut output);
    output
}

fn escape_into(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&#34;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
    }
}

fn write_element(element: &Element, output: &mut String) {
    match element {
        Element::Tag(tag) => write_tag(tag, output),
        Element::Text(text) => escape_into(&text.value, output),
        Element::Document(doc) => write_document(doc, output),
    }
}

fn write_document(doc: &Document, output: &mut String) {
    for element in doc {
        write_element(element, output);
    }
}

fn write_tag(tag: &TagNode, output: &mut String) {
    output.push('<');
    output.push_str(&tag.name);

    for attr in &tag.attributes {
        output.push(' ');
        output.push_str(&attr.key);
        output.push_str("=\"");
        escape_into(&attr.value, output);
        output.push('"');
    }

    output.push('>');

    if tag.is_void() {
        if !tag.children.is_empty() {
            tracing::debug!(
                tag = %tag.name,
                dropped = tag.children.len(),
                "Suppressing children of void tag"
            );
        }
        return;
    }

    write_document(&tag.children, output);

    output.push_str("</");
    output.push_str(&tag.name);
    output.push('>');
}

impl Element {
    /// Render this element to HTML
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        write_element(self, &mut output);
        output
    }
}

impl TagNode {
    /// Render this tag and its subtree to HTML
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        write_tag(self, &mut output);
        output
    }
}

impl TextNode {
    pub fn to_html(&self) -> String {
        escape(&self.value)
    }
}

impl Document {
    /// Concatenate the HTML of every member, no separator
    pub fn to_html(&self) -> String {
        let mut output = String::new();
        write_document(self, &mut output);
        output
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Display for TagNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
