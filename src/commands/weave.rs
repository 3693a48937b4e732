//! Weave command implementation.

use std::io::Write;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;

use super::load_document;

/// Options for the weave command.
#[derive(Debug, Clone, Default)]
pub struct WeaveOptions {
    /// Input document (standard input if absent).
    pub file: Option<PathBuf>,
}

/// Executes the weave command.
pub fn weave(ctx: &Context, options: WeaveOptions, out: &mut dyn Write) -> Result<()> {
    let doc = load_document(ctx, options.file.as_deref())?;
    writeln!(out, "{}", doc.weave())?;
    Ok(())
}
