//! Core model types for mdweb.

mod expansion;
mod fragment_name;
mod graph;
mod tangle;

pub use expansion::expansion_order;
pub use fragment_name::FragmentName;
pub use graph::{Dependency, Fragment, FragmentGraph};
pub use tangle::{tangle_root, Expansions};
