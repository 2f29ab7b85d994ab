//! Opt-in structural checks
//!
//! Rendering never calls into this module. Callers that want to reject
//! malformed trees before emitting them run `validate()` themselves.

use crate::error::{HtmlError, Result};
use crate::types::*;

fn has_forbidden_char(s: &str) -> bool {
    s.chars()
        .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '/' | '"' | '\'' | '='))
}

fn check_tag(tag: &TagNode) -> Result<()> {
    if tag.name.is_empty() {
        return Err(HtmlError::EmptyTagName);
    }
    if has_forbidden_char(&tag.name) {
        return Err(HtmlError::InvalidTagName(tag.name.clone()));
    }
    if !tag.is_void() && VOID_TAGS.iter().any(|v| v.eq_ignore_ascii_case(&tag.name)) {
        return Err(HtmlError::VoidTagCase(tag.name.clone()));
    }

    for attr in &tag.attributes {
        if attr.key.is_empty() || has_forbidden_char(&attr.key) {
            return Err(HtmlError::InvalidAttributeKey {
                tag: tag.name.clone(),
                key: attr.key.clone(),
            });
        }
    }

    if tag.is_void() && !tag.children.is_empty() {
        return Err(HtmlError::VoidTagWithChildren {
            tag: tag.name.clone(),
            count: tag.children.len(),
        });
    }

    Ok(())
}

impl TagNode {
    /// Check this tag and its subtree, reporting the first problem found
    pub fn validate(&self) -> Result<()> {
        check_tag(self)?;
        self.children.validate()
    }
}

impl Document {
    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(Element::validate)
    }
}

impl Element {
    /// Check the subtree. Text nodes are always valid.
    pub fn validate(&self) -> Result<()> {
        match self {
            Element::Tag(tag) => tag.validate(),
            Element::Text(_) => Ok(()),
            Element::Document(doc) => doc.validate(),
        }
    }
}
