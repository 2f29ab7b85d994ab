//! The site homepage

use html::{tag, text, Element, TagNode};
use serde::{Deserialize, Serialize};

/// Homepage content
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomepageConfig {
    pub title: String,
    pub heading: String,
    /// Value of `<html lang>`, omitted when `None`
    pub lang: Option<String>,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            title: "Homepage".to_string(),
            heading: "Hello, world!".to_string(),
            lang: None,
        }
    }
}

/// Build the homepage: `html > head > title` and `body > h1`
pub fn homepage(config: &HomepageConfig) -> Element {
    tracing::debug!(title = %config.title, lang = ?config.lang, "Building homepage");

    let mut root: TagNode = html::tag!(
        "html",
        html::tag!("head", html::tag!("title", text(config.title.as_str()))),
        html::tag!("body", html::tag!("h1", text(config.heading.as_str()))),
    );

    if let Some(lang) = &config.lang {
        root = root.lang(lang.as_str());
    }

    root.into()
}

/// Only the `<body>` of the homepage, for embedding in another page
pub fn homepage_body(config: &HomepageConfig) -> Element {
    tag("body")
        .child(html::tag!("h1", text(config.heading.as_str())))
        .into()
}
