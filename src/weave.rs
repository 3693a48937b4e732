//! Markdown rendering of a literate document.

use crate::readers::{LineKind, Mode, ScannedLine};

/// Indentation that turns a code line into a markdown code block line.
pub const CODE_INDENT: &str = "    ";

/// Renders a fragment definition line as a bold code-span heading.
pub fn fragment_heading(marker: &str) -> String {
    format!("**`{}`**", marker)
}

/// Weaves scanned lines into a markdown document.
///
/// Definition markers become a bold code-span heading surrounded by blank
/// lines, `@` markers become a blank line, code lines are indented as a
/// markdown code block and prose passes through unchanged.
pub fn weave<'a>(lines: impl IntoIterator<Item = ScannedLine<'a>>) -> String {
    let mut woven = Vec::new();

    for line in lines {
        match line.kind {
            LineKind::CodeStart { .. } => {
                woven.push(String::new());
                woven.push(fragment_heading(line.text));
                woven.push(String::new());
            }
            LineKind::ProseStart => woven.push(String::new()),
            LineKind::Content => match line.mode {
                Mode::Code => woven.push(format!("{}{}", CODE_INDENT, line.text)),
                Mode::Prose => woven.push(line.text.to_string()),
            },
        }
    }

    woven.join("\n")
}
