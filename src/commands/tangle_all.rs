//! Tangle-all command implementation.

use std::io::Write;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;
use crate::io::Transaction;

use super::load_document;

/// Options for the tangle-all command.
#[derive(Debug, Clone, Default)]
pub struct TangleAllOptions {
    /// Input document (standard input if absent).
    pub file: Option<PathBuf>,
    /// Dry run - show what would be done without doing it.
    pub dry_run: bool,
}

/// Executes the tangle-all command, writing one file per root fragment.
pub fn tangle_all(ctx: &Context, options: TangleAllOptions, out: &mut dyn Write) -> Result<()> {
    let doc = load_document(ctx, options.file.as_deref())?;
    let tangled = doc.tangle_all()?;

    for wanted in &ctx.config.roots {
        if !tangled.contains_key(wanted.as_str()) {
            tracing::warn!("Configured root <<{}>> is not a root of the document", wanted);
        }
    }

    let mut transaction = Transaction::new();
    for (root, content) in tangled {
        if !ctx.config.selects_root(root.as_str()) {
            tracing::debug!("Skipping root <<{}>>", root);
            continue;
        }
        transaction.write(ctx.output_path(root.as_str())?, content);
    }

    if transaction.is_empty() {
        writeln!(out, "No files to tangle.")?;
        return Ok(());
    }

    if options.dry_run {
        let pending = transaction.describe();
        writeln!(out, "Would perform {} actions:", pending.len())?;
        for desc in pending {
            writeln!(out, "  {}", desc)?;
        }
        return Ok(());
    }

    let written = transaction.execute()?;
    writeln!(out, "Tangled {} files.", written)?;
    Ok(())
}
