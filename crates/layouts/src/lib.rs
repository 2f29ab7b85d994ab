//! Page layouts built from the `html` document model
//!
//! Each layout is an ordinary function returning a finished `Element`.
//! Writing it somewhere (HTTP response, file) is up to the caller.

pub mod homepage;

pub use homepage::{homepage, homepage_body, HomepageConfig};
