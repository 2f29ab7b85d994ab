//! Core type definitions for the document model
//!
//! Key design principles:
//! 1. Closed enum for node kinds, no trait objects
//! 2. Values are stored raw; escaping belongs to the serializer
//! 3. SmallVec for attribute lists (most tags carry fewer than 4)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Attribute list of a single tag, in insertion order
pub type Attributes = SmallVec<[Attribute; 4]>;

/// Tags that never have children or a closing tag
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `name` is a void tag. Matching is exact, `BR` is not void.
pub fn is_void(name: &str) -> bool {
    VOID_TAGS.contains(&name)
}

/// A single `key="value"` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An HTML tag with attributes and children
///
/// Duplicate attribute keys are kept and all of them are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagNode {
    pub name: String,
    pub attributes: Attributes,
    pub children: Document,
}

impl TagNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: SmallVec::new(),
            children: Document::new(),
        }
    }

    /// Check if this tag is a void tag
    pub fn is_void(&self) -> bool {
        is_void(&self.name)
    }

    /// First value stored under `key`
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Plain text, rendered escaped with no markup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextNode {
    pub value: String,
}

impl TextNode {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// An ordered forest of elements with no wrapping tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(pub Vec<Element>);

impl Document {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.0.push(element.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.0.iter()
    }
}

impl From<Vec<Element>> for Document {
    fn from(elements: Vec<Element>) -> Self {
        Self(elements)
    }
}

impl FromIterator<Element> for Document {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Document {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A node of the tree
///
/// There is deliberately no `From<&str>`: text children must be wrapped
/// in a [`TextNode`] (see [`crate::text`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Tag(TagNode),
    Text(TextNode),
    Document(Document),
}

impl Element {
    /// Check if element is a tag
    pub fn is_tag(&self) -> bool {
        matches!(self, Element::Tag(_))
    }

    /// Check if element is text
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            Element::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_tag_mut(&mut self) -> Option<&mut TagNode> {
        match self {
            Element::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}

impl From<TagNode> for Element {
    fn from(tag: TagNode) -> Self {
        Element::Tag(tag)
    }
}

impl From<TextNode> for Element {
    fn from(text: TextNode) -> Self {
        Element::Text(text)
    }
}

impl From<Document> for Element {
    fn from(doc: Document) -> Self {
        Element::Document(doc)
    }
}
