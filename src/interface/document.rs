//! Document orchestrator for weave and tangle operations.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::errors::Result;
use crate::model::{tangle_root, FragmentGraph, FragmentName};
use crate::readers::scan;
use crate::weave::weave;

/// A parsed literate document.
///
/// Holds the source text and the fragment graph built from it. Weaving
/// rescans the text; tangling works off the graph.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path to the source file, if it was read from one.
    pub path: Option<PathBuf>,
    text: String,
    graph: FragmentGraph,
}

impl Document {
    /// Parses a document from text.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let graph = FragmentGraph::build(&text);
        Self {
            path: None,
            text,
            graph,
        }
    }

    /// Reads a document from any reader, such as standard input.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::parse(text))
    }

    /// Loads a document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let graph = FragmentGraph::from_scan(scan(&text), Some(path));
        tracing::debug!("Loaded {} ({} fragments)", path.display(), graph.len());

        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
            graph,
        })
    }

    /// Returns the source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the fragment graph.
    pub fn graph(&self) -> &FragmentGraph {
        &self.graph
    }

    /// Renders the document as markdown.
    pub fn weave(&self) -> String {
        weave(scan(&self.text))
    }

    /// Returns the fragments that no other fragment references.
    pub fn roots(&self) -> Vec<&FragmentName> {
        self.graph.roots()
    }

    /// Tangles a single root fragment.
    pub fn tangle(&self, root: &str) -> Result<String> {
        tangle_root(&self.graph, root)
    }

    /// Tangles every root fragment, each with its own expansion memo.
    pub fn tangle_all(&self) -> Result<IndexMap<FragmentName, String>> {
        let mut tangled = IndexMap::new();
        for root in self.roots() {
            let content = self.tangle(root.as_str())?;
            tangled.insert(root.clone(), content);
        }
        Ok(tangled)
    }
}

/// Weaves document text into markdown.
pub fn weave_text(text: &str) -> String {
    weave(scan(text))
}

/// Lists the root fragments of a document.
pub fn list_roots(text: &str) -> Vec<FragmentName> {
    FragmentGraph::build(text).roots().into_iter().cloned().collect()
}

/// Tangles one root fragment of a document.
pub fn tangle(text: &str, root: &str) -> Result<String> {
    Document::parse(text).tangle(root)
}

/// Tangles every root fragment of a document.
pub fn tangle_all(text: &str) -> Result<IndexMap<FragmentName, String>> {
    Document::parse(text).tangle_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MdwebError;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const SCENARIO: &str = "@\nTitle\n<<main>>=\nstart\n<<helper>>\nend\n<<helper>>=\nmiddle\n";

    #[test]
    fn test_scenario_tangle() {
        let doc = Document::parse(SCENARIO);
        assert_eq!(doc.tangle("main").unwrap(), "start\nmiddle\n\nend\n");
    }

    #[test]
    fn test_scenario_roots() {
        assert_eq!(list_roots(SCENARIO), vec![FragmentName::new("main")]);
    }

    #[test]
    fn test_scenario_weave() {
        let expected = [
            "",
            "Title",
            "",
            "**`<<main>>=`**",
            "",
            "    start",
            "    <<helper>>",
            "    end",
            "",
            "**`<<helper>>=`**",
            "",
            "    middle",
        ]
        .join("\n");
        assert_eq!(weave_text(SCENARIO), expected);
        assert_eq!(Document::parse(SCENARIO).weave(), expected);
    }

    #[test]
    fn test_fragment_accumulation() {
        let text = "<<chunk>>=\nfirst\n@ between\n<<chunk>>=\nsecond\n";
        assert_eq!(tangle(text, "chunk").unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_indented_reference_in_document() {
        let text = "<<main.py>>=\ndef main():\n    <<body>>\n\n<<body>>=\nx = 1\n\nprint(x)\n";
        assert_eq!(
            tangle(text, "main.py").unwrap(),
            "def main():\n    x = 1\n\n    print(x)\n\n"
        );
    }

    #[test]
    fn test_unknown_root() {
        let result = tangle(SCENARIO, "nope");
        assert!(matches!(result, Err(MdwebError::UnknownRoot(_))));
    }

    #[test]
    fn test_tangle_all() {
        let text = "<<a>>=\n<<lib>>\n<<b>>=\n# <<lib>>\n<<lib>>=\nshared\n";
        let tangled = tangle_all(text).unwrap();

        let roots: Vec<_> = tangled.keys().map(|k| k.as_str()).collect();
        assert_eq!(roots, vec!["a", "b"]);
        assert_eq!(tangled["a"], "shared\n");
        assert_eq!(tangled["b"], "# shared\n");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::parse("");
        assert_eq!(doc.weave(), "");
        assert!(doc.roots().is_empty());
        assert!(doc.tangle_all().unwrap().is_empty());
    }

    #[test]
    fn test_zero_line_fragment_tangles_to_nothing() {
        assert_eq!(tangle("<<e>>=\n", "e").unwrap(), "");
    }

    #[test]
    fn test_zero_line_fragment_is_a_root() {
        let text = "<<empty>>=\n@\nprose\n";
        assert_eq!(list_roots(text), vec![FragmentName::new("empty")]);

        let tangled = tangle_all(text).unwrap();
        assert_eq!(tangled.len(), 1);
        assert_eq!(tangled["empty"], "");
    }

    #[test]
    fn test_reference_to_zero_line_fragment_leaves_blank_line() {
        let text = "<<main>>=\na\n<<empty>>\nb\n<<empty>>=\n";
        assert_eq!(tangle(text, "main").unwrap(), "a\n\nb\n");
    }

    #[test]
    fn test_from_reader() {
        let doc = Document::from_reader(SCENARIO.as_bytes()).unwrap();
        assert!(doc.path.is_none());
        assert_eq!(doc.text(), SCENARIO);
        assert_eq!(doc.tangle("main").unwrap(), "start\nmiddle\n\nend\n");
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'<', b'<', 0xff, 0xfe];
        let result = Document::from_reader(bytes);
        assert!(matches!(result, Err(MdwebError::Io(_))));
    }

    #[test]
    fn test_load_records_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("web.md");
        fs::write(&path, SCENARIO).unwrap();

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
        let main = loaded.graph().get("main").unwrap();
        assert_eq!(main.definitions()[0].line, 3);
        assert_eq!(loaded.text(), SCENARIO);
        assert!(Document::parse(SCENARIO).path.is_none());
    }
}
