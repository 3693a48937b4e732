//! Line scanner that classifies a literate document.
//!
//! The scanner is the only place where marker lines are recognised. It
//! tracks the current [`Mode`] and the active fragment name, and yields one
//! [`ScannedLine`] per input line. Both the weaver and the graph builder
//! consume this stream.

use crate::config::{is_prose_start, parse_code_start};

/// Scanner mode: whether lines currently belong to prose or to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Documentation text.
    #[default]
    Prose,
    /// Lines of the active code fragment.
    Code,
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `<<name>>=` marker opening a code fragment.
    CodeStart {
        /// The fragment being defined.
        name: &'a str,
    },
    /// An `@` marker opening a prose section.
    ProseStart,
    /// Any other line; belongs to the current mode.
    Content,
}

/// A classified line of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// Line number (1-indexed).
    pub line: usize,
    /// Mode after this line has been processed.
    pub mode: Mode,
    /// The active fragment name while in code mode.
    pub fragment: Option<&'a str>,
    /// What kind of line this is.
    pub kind: LineKind<'a>,
    /// The raw line, without its line terminator.
    pub text: &'a str,
}

impl<'a> ScannedLine<'a> {
    /// Returns the line as content, or `None` for marker lines.
    pub fn content(&self) -> Option<&'a str> {
        match self.kind {
            LineKind::Content => Some(self.text),
            _ => None,
        }
    }

    /// Returns true for `@` and `<<name>>=` lines.
    pub fn is_marker(&self) -> bool {
        !matches!(self.kind, LineKind::Content)
    }

    /// Returns the line if it is content of a code fragment, with that
    /// fragment's name.
    pub fn code(&self) -> Option<(&'a str, &'a str)> {
        match (self.mode, self.fragment, self.kind) {
            (Mode::Code, Some(fragment), LineKind::Content) => Some((fragment, self.text)),
            _ => None,
        }
    }
}

/// Mutable scan state threaded through the document.
#[derive(Debug, Clone, Copy, Default)]
struct ScanState<'a> {
    mode: Mode,
    fragment: Option<&'a str>,
}

impl<'a> ScanState<'a> {
    fn classify(&mut self, text: &'a str) -> LineKind<'a> {
        if let Some(name) = parse_code_start(text) {
            self.mode = Mode::Code;
            self.fragment = Some(name);
            LineKind::CodeStart { name }
        } else if is_prose_start(text) {
            self.mode = Mode::Prose;
            self.fragment = None;
            LineKind::ProseStart
        } else {
            LineKind::Content
        }
    }
}

/// Iterator over the classified lines of a document.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    state: ScanState<'a>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over the given document text.
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            state: ScanState::default(),
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, text) = self.lines.next()?;
        let kind = self.state.classify(text);

        Some(ScannedLine {
            line: index + 1,
            mode: self.state.mode,
            fragment: self.state.fragment,
            kind,
            text,
        })
    }
}

/// Scans a document into classified lines.
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mode_is_prose() {
        let lines: Vec<_> = scan("hello\n<<x>>").collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.mode == Mode::Prose));
        assert!(lines.iter().all(|l| l.fragment.is_none()));
        assert!(lines.iter().all(|l| l.code().is_none()));
    }

    #[test]
    fn test_code_and_prose_markers() {
        let lines: Vec<_> = scan("@ intro\ntext\n<<main>>=\ncode\n@\nmore").collect();

        assert_eq!(lines[0].kind, LineKind::ProseStart);
        assert_eq!(lines[0].content(), None);
        assert_eq!(lines[1].content(), Some("text"));
        assert_eq!(lines[1].mode, Mode::Prose);

        assert_eq!(lines[2].kind, LineKind::CodeStart { name: "main" });
        assert_eq!(lines[2].mode, Mode::Code);
        assert!(lines[2].is_marker());

        assert_eq!(lines[3].code(), Some(("main", "code")));
        assert_eq!(lines[3].line, 4);

        assert_eq!(lines[4].kind, LineKind::ProseStart);
        assert_eq!(lines[4].mode, Mode::Prose);
        assert_eq!(lines[5].fragment, None);
    }

    #[test]
    fn test_code_start_switches_fragment() {
        let lines: Vec<_> = scan("<<a>>=\none\n<<b>>=\ntwo").collect();
        assert_eq!(lines[1].code(), Some(("a", "one")));
        assert_eq!(lines[3].code(), Some(("b", "two")));
    }

    #[test]
    fn test_code_start_has_priority_over_prose() {
        // `<<@>>=` starts code even though it is not an `@` line;
        // `@<<x>>=` is a prose marker because it does not start with `<<`.
        let lines: Vec<_> = scan("@<<x>>=\n<<@>>=").collect();
        assert_eq!(lines[0].kind, LineKind::ProseStart);
        assert_eq!(lines[1].kind, LineKind::CodeStart { name: "@" });
    }

    #[test]
    fn test_references_pass_through() {
        let lines: Vec<_> = scan("<<a>>=\n    <<b>>").collect();
        assert_eq!(lines[1].code(), Some(("a", "    <<b>>")));
    }

    #[test]
    fn test_trailing_newline_and_crlf() {
        let lines: Vec<_> = scan("<<a>>=\r\nx\r\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "x");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(scan("").count(), 0);
    }
}
