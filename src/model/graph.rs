//! Fragment table and dependency graph.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

use super::fragment_name::FragmentName;
use crate::config::parse_reference;
use crate::readers::{scan, LineKind, ScannedLine};
use crate::text_location::TextLocation;

/// A named code fragment, accumulated over every span that defines it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    name: FragmentName,
    lines: Vec<String>,
    definitions: Vec<TextLocation>,
}

impl Fragment {
    fn new(name: FragmentName) -> Self {
        Self {
            name,
            lines: Vec::new(),
            definitions: Vec::new(),
        }
    }

    /// Returns the fragment name.
    pub fn name(&self) -> &FragmentName {
        &self.name
    }

    /// Returns the raw lines, references left unexpanded.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns where each span of this fragment was opened.
    pub fn definitions(&self) -> &[TextLocation] {
        &self.definitions
    }
}

/// A dependency edge: `caller` contains a reference to `callee`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dependency {
    /// Fragment containing the reference.
    pub caller: FragmentName,
    /// Referenced fragment name (may be undefined).
    pub callee: FragmentName,
}

impl Dependency {
    /// Creates a new edge.
    pub fn new(caller: impl Into<FragmentName>, callee: impl Into<FragmentName>) -> Self {
        Self {
            caller: caller.into(),
            callee: callee.into(),
        }
    }
}

/// Fragment table plus the reference edges between fragments.
///
/// Built once from a document and never mutated afterwards.
/// Fragments are kept in order of first definition.
#[derive(Debug, Clone, Default)]
pub struct FragmentGraph {
    fragments: IndexMap<FragmentName, Fragment>,
    edges: Vec<Dependency>,
}

impl FragmentGraph {
    /// Builds the graph from document text.
    pub fn build(text: &str) -> Self {
        Self::from_scan(scan(text), None)
    }

    /// Builds the graph from an already scanned line stream.
    ///
    /// `source` is attached to the recorded definition locations.
    pub fn from_scan<'a>(
        lines: impl IntoIterator<Item = ScannedLine<'a>>,
        source: Option<&Path>,
    ) -> Self {
        let mut graph = Self::default();

        for line in lines {
            match line.kind {
                LineKind::CodeStart { name } => {
                    let location = TextLocation::line_only(line.line);
                    let location = match source {
                        Some(path) => location.with_filename(path.to_path_buf()),
                        None => location,
                    };
                    graph.open_fragment(name, location);
                }
                LineKind::ProseStart => {}
                LineKind::Content => {
                    if let Some((name, text)) = line.code() {
                        graph.add_line(name, text);
                    }
                }
            }
        }

        tracing::debug!(
            fragments = graph.fragments.len(),
            edges = graph.edges.len(),
            "Built fragment graph"
        );
        graph
    }

    /// Registers a definition span. The fragment exists from here on, even
    /// if the span has no lines.
    fn open_fragment(&mut self, name: &str, location: TextLocation) {
        tracing::trace!("Fragment <<{}>> opened at {}", name, location);
        self.fragments
            .entry(FragmentName::new(name))
            .or_insert_with(|| Fragment::new(FragmentName::new(name)))
            .definitions
            .push(location);
    }

    fn add_line(&mut self, name: &str, text: &str) {
        if let Some(reference) = parse_reference(text) {
            self.edges.push(Dependency::new(name, reference.name));
        }

        let fragment = self
            .fragments
            .entry(FragmentName::new(name))
            .or_insert_with(|| Fragment::new(FragmentName::new(name)));
        fragment.lines.push(text.to_string());
    }

    /// Gets a fragment by name.
    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }

    /// Checks if a fragment with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Returns all fragment names in order of first definition.
    pub fn names(&self) -> impl Iterator<Item = &FragmentName> {
        self.fragments.keys()
    }

    /// Returns all fragments in order of first definition.
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.values()
    }

    /// Returns the dependency edges in the order references were found.
    pub fn edges(&self) -> &[Dependency] {
        &self.edges
    }

    /// Returns the number of fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if the document defines no fragments.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Returns the fragments no other fragment references.
    ///
    /// Each root appears once. Callers should not depend on the order.
    pub fn roots(&self) -> Vec<&FragmentName> {
        let referenced: HashSet<&FragmentName> = self.edges.iter().map(|e| &e.callee).collect();
        self.fragments
            .keys()
            .filter(|name| !referenced.contains(name))
            .collect()
    }
}
