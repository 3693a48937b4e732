//! Marker syntax for literate documents.
//!
//! Three markers are recognised:
//!
//! - `@` at the start of a line opens a prose section.
//! - `<<name>>=` at the start of a line opens (or continues) the code
//!   fragment `name`.
//! - `<<name>>` anywhere inside a code line references another fragment.
//!   Everything before it on the line is the prefix that gets reapplied
//!   to each expanded line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Character that opens a prose section.
pub const PROSE_MARKER: char = '@';

/// Pattern for fragment definition lines like `<<name>>=`.
pub static CODE_START_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<<(?P<name>.+)>>=").unwrap());

/// Pattern for fragment references like `    <<name>>`.
///
/// Both captures are greedy, so on a line with several markers the last
/// one is the reference and the rest of the line before it is the prefix.
pub static REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<prefix>.*)<<(?P<name>.+)>>").unwrap());

/// A reference found inside a code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference<'a> {
    /// Text preceding the marker on its line.
    pub prefix: &'a str,
    /// Name of the referenced fragment.
    pub name: &'a str,
}

/// Returns true if the line opens a prose section.
pub fn is_prose_start(line: &str) -> bool {
    line.starts_with(PROSE_MARKER)
}

/// Returns the fragment name if the line opens a code fragment.
pub fn parse_code_start(line: &str) -> Option<&str> {
    CODE_START_PATTERN
        .captures(line)
        .and_then(|caps| caps.name("name"))
        .map(|m| m.as_str())
}

/// Extracts the reference from a code line, if it has one.
///
/// A marker immediately followed by `=` is a definition, not a reference.
/// Text after the closing `>>` is not part of the reference.
pub fn parse_reference(line: &str) -> Option<Reference<'_>> {
    let caps = REF_PATTERN.captures(line)?;
    let whole = caps.get(0)?;
    if line[whole.end()..].starts_with('=') {
        return None;
    }

    Some(Reference {
        prefix: caps.name("prefix")?.as_str(),
        name: caps.name("name")?.as_str(),
    })
}
