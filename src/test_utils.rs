//! Shared test utilities.

use crate::model::FragmentGraph;

/// Builds a document from `(name, source)` pairs, one `<<name>>=` span each.
pub fn make_document(fragments: &[(&str, &str)]) -> String {
    let mut doc = String::new();
    for (name, source) in fragments {
        doc.push_str(&format!("<<{}>>=\n{}\n", name, source));
    }
    doc
}

/// Creates a fragment graph from `(name, source)` pairs.
pub fn make_graph(fragments: &[(&str, &str)]) -> FragmentGraph {
    FragmentGraph::build(&make_document(fragments))
}
