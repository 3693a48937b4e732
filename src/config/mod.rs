//! Configuration loading and management.

mod config_data;
mod config_update;
pub mod markers;

use std::fs;
use std::path::{Path, PathBuf};

pub use config_data::Config;
pub use config_update::ConfigUpdate;
pub use markers::{
    is_prose_start, parse_code_start, parse_reference, Reference, CODE_START_PATTERN,
    PROSE_MARKER, REF_PATTERN,
};

use crate::errors::{MdwebError, Result};

/// Standard configuration file names to search for.
const CONFIG_FILES: &[&str] = &["mdweb.toml", ".mdweb.toml"];

/// Major configuration version this build understands.
const SUPPORTED_MAJOR_VERSION: &str = "1";

/// Finds the configuration file in the given directory or its parents.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for name in CONFIG_FILES {
            let candidate = current.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Reads configuration from a TOML file.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let update: ConfigUpdate = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration from {}", path.display());
    let config = update.merge_into(&Config::default());
    check_version(&config.version)?;
    Ok(config)
}

/// Accepts `1`, `1.0`, `1.2` and so on; any other major version is an error.
fn check_version(version: &str) -> Result<()> {
    let major = version.trim().split('.').next().unwrap_or_default();
    if major == SUPPORTED_MAJOR_VERSION {
        Ok(())
    } else {
        Err(MdwebError::Config(format!(
            "Unsupported configuration version '{}' (expected {}.x)",
            version, SUPPORTED_MAJOR_VERSION
        )))
    }
}

/// Reads configuration, searching from the given directory.
///
/// If no config file is found, returns the default configuration.
pub fn read_config(start_dir: &Path) -> Result<Config> {
    match find_config_file(start_dir) {
        Some(path) => read_config_file(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdweb.toml");
        fs::write(&config_path, "version = \"1.0\"").unwrap();

        let found = find_config_file(dir.path()).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_find_hidden_config_file_in_parent() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".mdweb.toml");
        fs::write(&config_path, "").unwrap();

        let subdir = dir.path().join("docs");
        fs::create_dir(&subdir).unwrap();

        let found = find_config_file(&subdir).unwrap();
        assert_eq!(found, config_path);
    }

    #[test]
    fn test_read_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdweb.toml");
        fs::write(
            &config_path,
            r#"
output_dir = "build"
roots = ["main.c", "util.h"]
"#,
        )
        .unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.output_dir, Some(PathBuf::from("build")));
        assert_eq!(config.roots, vec!["main.c", "util.h"]);
    }

    #[test]
    fn test_read_config_invalid_toml() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdweb.toml");
        fs::write(&config_path, "roots = [").unwrap();

        let result = read_config_file(&config_path);
        assert!(matches!(result, Err(crate::MdwebError::TomlParse(_))));
    }

    #[test]
    fn test_read_config_accepts_minor_versions() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdweb.toml");
        fs::write(&config_path, "version = \"1.3\"").unwrap();

        let config = read_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.3");
    }

    #[test]
    fn test_read_config_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("mdweb.toml");
        fs::write(&config_path, "version = \"2.0\"").unwrap();

        let result = read_config_file(&config_path);
        assert!(matches!(
            result,
            Err(crate::MdwebError::Config(ref msg)) if msg.contains("2.0")
        ));
    }

    #[test]
    fn test_read_config_default() {
        let dir = tempdir().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }
}
