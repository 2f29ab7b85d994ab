//! Tag builder DSL
//!
//! ```
//! use html::{tag, text};
//!
//! let page = html::tag!("div", html::tag!("h1", text("Hi")).class("title"))
//!     .id("main")
//!     .tab_index(1);
//! assert_eq!(
//!     page.to_html(),
//!     r#"<div id="main" tabindex="1"><h1 class="title">Hi</h1></div>"#
//! );
//! assert_eq!(tag("br").to_html(), "<br>");
//! ```
//!
//! Attribute methods consume the tag and hand the same tag back, so chains
//! never copy. To branch one builder into two trees, call `deep_copy` first.

use crate::types::*;

/// Build a tag with the given name and children.
///
/// Each child goes through `Element::from`, so it must already be a
/// `TagNode`, `TextNode`, `Document` or `Element`. Strings are rejected at
/// compile time; wrap them with [`text`].
#[macro_export]
macro_rules! tag {
    ($name:expr $(, $child:expr)* $(,)?) => {
        $crate::TagNode::with_children(
            $name,
            ::std::vec![$($crate::Element::from($child)),*],
        )
    };
}

/// Tag with no attributes and no children
pub fn tag(name: impl Into<String>) -> TagNode {
    TagNode::new(name)
}

/// Text node holding `value` unescaped
pub fn text(value: impl Into<String>) -> TextNode {
    TextNode::new(value)
}

impl TagNode {
    pub fn with_children(name: impl Into<String>, children: Vec<Element>) -> Self {
        Self {
            children: Document(children),
            ..Self::new(name)
        }
    }

    /// Append one child
    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child);
        self
    }

    /// Append an attribute in place
    pub fn push_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }

    /// Append an attribute and return the same tag
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push_attr(key, value);
        self
    }

    /// Set the `accesskey` attribute
    pub fn access_key(self, key: impl Into<String>) -> Self {
        self.attr("accesskey", key)
    }

    /// Set the `class` attribute
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Set the `contenteditable` attribute
    pub fn content_editable(self, value: impl Into<String>) -> Self {
        self.attr("contenteditable", value)
    }

    /// Set the `dir` attribute. Not checked against `ltr`/`rtl`/`auto`.
    pub fn dir(self, dir: impl Into<String>) -> Self {
        self.attr("dir", dir)
    }

    /// Set the `draggable` attribute
    pub fn draggable(self, value: impl Into<String>) -> Self {
        self.attr("draggable", value)
    }

    /// Set the `hidden` attribute
    pub fn hidden(self, value: impl Into<String>) -> Self {
        self.attr("hidden", value)
    }

    /// Set the `id` attribute
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Set the `lang` attribute
    pub fn lang(self, lang: impl Into<String>) -> Self {
        self.attr("lang", lang)
    }

    /// Set the `spellcheck` attribute
    pub fn spell_check(self, value: impl Into<String>) -> Self {
        self.attr("spellcheck", value)
    }

    /// Set the `style` attribute
    pub fn style(self, style: impl Into<String>) -> Self {
        self.attr("style", style)
    }

    /// Set the `tabindex` attribute to the decimal form of `index`
    pub fn tab_index(self, index: i32) -> Self {
        self.attr("tabindex", index.to_string())
    }

    /// Set the `title` attribute
    pub fn title(self, title: impl Into<String>) -> Self {
        self.attr("title", title)
    }

    /// Set the `translate` attribute
    pub fn translate(self, value: impl Into<String>) -> Self {
        self.attr("translate", value)
    }
}
