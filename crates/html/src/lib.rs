//! HTML Document Model
//!
//! Build HTML trees with plain function calls and render them to markup.
//!
//! ## Design
//!
//! - **One enum**: `Element` is a tag, a text node or a document, nothing else
//! - **Raw storage**: values are escaped once, at render time
//! - **Owned builders**: attribute calls consume and return the same tag
//!
//! ```text
//! tag!/tag()/text() → TagNode → .attr()/.class()/... → Element → to_html()
//!                                                          ↓
//!                                                     deep_copy()
//! ```

pub mod copy;
pub mod error;
pub mod serializer;
pub mod snapshot;
pub mod tags;
pub mod types;
pub mod validate;

pub use error::{HtmlError, Result};
pub use serializer::escape;
pub use tags::{tag, text};
pub use types::*;
