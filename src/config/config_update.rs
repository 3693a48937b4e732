//! Configuration update and merging.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config_data::Config;

/// Partial configuration update that can be merged into a Config.
///
/// All fields are optional. Only specified fields will override the base config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigUpdate {
    /// Version of the configuration format.
    #[serde(default)]
    pub version: Option<String>,

    /// Directory for tangled files.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Roots written by `tangle-all`.
    #[serde(default)]
    pub roots: Option<Vec<String>>,
}

impl ConfigUpdate {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges this update into a base configuration, returning a new Config.
    pub fn merge_into(self, base: &Config) -> Config {
        Config {
            version: self.version.unwrap_or_else(|| base.version.clone()),
            output_dir: self.output_dir.or_else(|| base.output_dir.clone()),
            roots: self.roots.unwrap_or_else(|| base.roots.clone()),
        }
    }
}

impl From<ConfigUpdate> for Config {
    fn from(update: ConfigUpdate) -> Self {
        update.merge_into(&Config::default())
    }
}
