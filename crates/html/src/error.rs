//! Error types for the document model
//!
//! Building, rendering and copying never fail. Errors only come out of the
//! opt-in validation pass and JSON snapshots.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HtmlError>;

#[derive(Debug, Error)]
pub enum HtmlError {
    #[error("Empty tag name")]
    EmptyTagName,

    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Invalid attribute key {key:?} on <{tag}>")]
    InvalidAttributeKey { tag: String, key: String },

    #[error("Void tag <{tag}> has {count} children")]
    VoidTagWithChildren { tag: String, count: usize },

    #[error("Tag name {0:?} only matches a void tag case-insensitively")]
    VoidTagCase(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
