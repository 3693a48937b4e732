//! Tangle command implementation.

use std::io::Write;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;

use super::load_document;

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// Root fragment to expand.
    pub root: String,
    /// Input document (standard input if absent).
    pub file: Option<PathBuf>,
}

/// Executes the tangle command, printing the expanded root.
pub fn tangle(ctx: &Context, options: TangleOptions, out: &mut dyn Write) -> Result<()> {
    let doc = load_document(ctx, options.file.as_deref())?;
    let content = doc.tangle(&options.root)?;
    writeln!(out, "{}", content)?;
    Ok(())
}
