//! Command implementations behind the `mdweb` binary.
//!
//! Each command reads one document (a file, or standard input when no file
//! is given) and writes its result to the supplied writer.

mod roots;
mod tangle;
mod tangle_all;
mod weave;

use std::io::Read;
use std::path::Path;

pub use roots::{roots, RootsOptions};
pub use tangle::{tangle, TangleOptions};
pub use tangle_all::{tangle_all, TangleAllOptions};
pub use weave::{weave, WeaveOptions};

use crate::errors::Result;
use crate::interface::{Context, Document};

/// Loads the input document for a command.
fn load_document(ctx: &Context, file: Option<&Path>) -> Result<Document> {
    load_document_or(ctx, file, std::io::stdin().lock())
}

/// Loads `file` relative to the context, falling back to `input`.
fn load_document_or(ctx: &Context, file: Option<&Path>, input: impl Read) -> Result<Document> {
    match file {
        Some(path) => Document::load(&ctx.resolve_path(path)),
        None => Document::from_reader(input),
    }
}
