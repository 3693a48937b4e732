//! Configuration data structures.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration structure for mdweb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Version of the configuration format.
    #[serde(default = "default_version")]
    pub version: String,

    /// Directory that `tangle-all` writes root fragments into.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Roots written by `tangle-all`. Empty means every root.
    #[serde(default)]
    pub roots: Vec<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_dir: None,
            roots: Vec::new(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the output directory, if configured.
    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    /// Returns true if `tangle-all` should write the given root.
    pub fn selects_root(&self, root: &str) -> bool {
        self.roots.is_empty() || self.roots.iter().any(|r| r == root)
    }
}
