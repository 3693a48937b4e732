//! High-level interface for mdweb operations.

mod context;
mod document;

pub use context::Context;
pub use document::{list_roots, tangle, tangle_all, weave_text, Document};
