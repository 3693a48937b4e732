//! Execution context for mdweb commands.

use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::errors::{MdwebError, Result};

/// Context for mdweb operations.
///
/// Contains configuration and the directory relative paths resolve against.
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration.
    pub config: Config,
    /// Base directory for operations.
    pub base_dir: PathBuf,
}

impl Context {
    /// Creates a new context with the given configuration.
    pub fn new(config: Config, base_dir: PathBuf) -> Self {
        Self { config, base_dir }
    }

    /// Creates a context with default configuration.
    pub fn default_for_dir(base_dir: PathBuf) -> Self {
        Self::new(Config::default(), base_dir)
    }

    /// Creates a context for a directory, reading its configuration file.
    pub fn from_dir(base_dir: PathBuf) -> Result<Self> {
        let config = crate::config::read_config(&base_dir)?;
        Ok(Self::new(config, base_dir))
    }

    /// Resolves a path relative to the base directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Returns the directory tangled roots are written to.
    pub fn output_dir(&self) -> PathBuf {
        match self.config.output_dir() {
            Some(dir) => self.resolve_path(dir),
            None => self.base_dir.clone(),
        }
    }

    /// Returns the file a root fragment is written to.
    ///
    /// The root name is used as a path relative to the output directory.
    /// Names that would escape it are rejected.
    pub fn output_path(&self, root: &str) -> Result<PathBuf> {
        let relative = Path::new(root);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if root.trim().is_empty() || escapes {
            return Err(MdwebError::InvalidOutputPath(relative.to_path_buf()));
        }
        Ok(self.output_dir().join(relative))
    }
}
