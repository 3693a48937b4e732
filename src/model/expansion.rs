//! Dependency-first ordering of fragments for expansion.

use std::collections::HashSet;

use indexmap::IndexMap;

use super::fragment_name::FragmentName;
use super::graph::Dependency;

/// Groups callees by caller, keeping edge insertion order.
fn callees_by_caller(edges: &[Dependency]) -> IndexMap<&FragmentName, Vec<&FragmentName>> {
    let mut callees: IndexMap<&FragmentName, Vec<&FragmentName>> = IndexMap::new();
    for edge in edges {
        callees.entry(&edge.caller).or_default().push(&edge.callee);
    }
    callees
}

/// Returns the fragments reachable from `root`, each after everything it
/// references.
///
/// This is a depth-first post-order walk. A name is marked visited before
/// its callees are explored, so a cycle in `edges` cannot make the walk
/// diverge: every reachable name is emitted exactly once. Callees are
/// explored in the order their edges were recorded. Names without a
/// definition are leaves and are still part of the result.
pub fn expansion_order(root: &FragmentName, edges: &[Dependency]) -> Vec<FragmentName> {
    let callees = callees_by_caller(edges);
    let mut visited: HashSet<&FragmentName> = HashSet::new();
    let mut order = Vec::new();

    // Each frame is a node plus the index of its next callee to visit.
    let mut stack: Vec<(&FragmentName, usize)> = vec![(root, 0)];
    visited.insert(root);

    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        let next = callees.get(node).and_then(|c| c.get(frame.1)).copied();

        match next {
            Some(callee) => {
                frame.1 += 1;
                if visited.insert(callee) {
                    stack.push((callee, 0));
                }
            }
            None => {
                order.push(node.clone());
                stack.pop();
            }
        }
    }

    tracing::debug!("Expansion order for <<{}>>: {} fragments", root, order.len());
    order
}
