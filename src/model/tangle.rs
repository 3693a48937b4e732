//! Tangle algorithm for expanding fragment references.

use std::collections::HashMap;

use super::expansion::expansion_order;
use super::fragment_name::FragmentName;
use super::graph::{Fragment, FragmentGraph};
use crate::config::parse_reference;
use crate::errors::{MdwebError, Result};

/// Finalized expansions, keyed by fragment name.
///
/// Owned by a single tangle call. An entry is never revisited once written.
#[derive(Debug, Default)]
pub struct Expansions {
    memo: HashMap<FragmentName, Vec<String>>,
}

impl Expansions {
    /// Creates an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the finished expansion of a fragment.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.memo.get(name).map(Vec::as_slice)
    }

    /// Expands one fragment against the expansions finished so far and
    /// records the result.
    ///
    /// A reference whose target has no finished expansion contributes
    /// nothing: the target is either undefined or is still being expanded
    /// further up a reference cycle.
    pub fn expand(&mut self, fragment: &Fragment) -> &[String] {
        let mut output = Vec::with_capacity(fragment.lines().len() + 1);

        for line in fragment.lines() {
            match parse_reference(line) {
                Some(reference) => {
                    let Some(inner) = self.memo.get(reference.name) else {
                        continue;
                    };
                    for expanded in inner {
                        if expanded.is_empty() {
                            output.push(String::new());
                        } else {
                            output.push(format!("{}{}", reference.prefix, expanded));
                        }
                    }
                }
                None => output.push(line.clone()),
            }
        }

        if output.last().map_or(true, |last| !last.is_empty()) {
            output.push(String::new());
        }

        let slot = self.memo.entry(fragment.name().clone()).or_default();
        *slot = output;
        slot
    }
}

/// Tangles a root fragment into its final text.
///
/// Fragments are expanded in dependency-first order so that every
/// reference target is finished before its referrer. The result ends with
/// a single blank line and is joined with `\n`.
pub fn tangle_root(graph: &FragmentGraph, root: &str) -> Result<String> {
    let root = FragmentName::new(root);
    if !graph.contains(root.as_str()) {
        return Err(MdwebError::UnknownRoot(root));
    }

    let mut expansions = Expansions::new();
    for name in expansion_order(&root, graph.edges()) {
        if let Some(fragment) = graph.get(name.as_str()) {
            expansions.expand(fragment);
        }
    }

    let lines = expansions
        .get(root.as_str())
        .ok_or_else(|| MdwebError::UnknownRoot(root.clone()))?;
    Ok(lines.join("\n"))
}
