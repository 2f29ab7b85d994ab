//! JSON snapshots of built trees
//!
//! Snapshots hold raw values; escaping only happens when rendering.

use crate::error::Result;
use crate::types::Element;

impl Element {
    /// Serialize the tree to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild a tree from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Element> {
        Ok(serde_json::from_str(json)?)
    }
}
