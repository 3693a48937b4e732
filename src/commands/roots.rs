//! Roots command implementation.

use std::io::Write;
use std::path::PathBuf;

use crate::errors::Result;
use crate::interface::Context;

use super::load_document;

/// Options for the roots command.
#[derive(Debug, Clone, Default)]
pub struct RootsOptions {
    /// Input document (standard input if absent).
    pub file: Option<PathBuf>,
    /// Print a JSON array instead of one name per line.
    pub json: bool,
}

/// Executes the roots command.
pub fn roots(ctx: &Context, options: RootsOptions, out: &mut dyn Write) -> Result<()> {
    let doc = load_document(ctx, options.file.as_deref())?;
    let roots = doc.roots();

    if options.json {
        writeln!(out, "{}", serde_json::to_string(&roots)?)?;
    } else {
        for root in roots {
            writeln!(out, "{}", root)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const WEB: &str = "<<a.c>>=\n<<common>>\n<<b.c>>=\n<<common>>\n<<common>>=\nx\n";

    fn run(json: bool) -> String {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("web.md"), WEB).unwrap();
        let ctx = Context::default_for_dir(dir.path().to_path_buf());

        let mut out = Vec::new();
        let options = RootsOptions {
            file: Some(PathBuf::from("web.md")),
            json,
        };
        roots(&ctx, options, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_roots_plain() {
        assert_eq!(run(false), "a.c\nb.c\n");
    }

    #[test]
    fn test_roots_json() {
        assert_eq!(run(true), "[\"a.c\",\"b.c\"]\n");
    }
}
