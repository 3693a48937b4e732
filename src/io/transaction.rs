//! Batched, atomic writing of tangled files.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::Result;

/// Write content to a file, creating parent directories as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteAction {
    /// Target file path.
    pub path: PathBuf,
    /// Content to write.
    pub content: String,
}

impl WriteAction {
    /// Creates a new write action.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns true if the target already holds exactly this content.
    pub fn is_unchanged(&self) -> bool {
        fs::read_to_string(&self.path)
            .map(|existing| existing == self.content)
            .unwrap_or(false)
    }

    /// Executes the action.
    pub fn execute(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        atomic_write(&self.path, &self.content)?;
        Ok(())
    }

    /// Returns a description of this action.
    pub fn describe(&self) -> String {
        let verb = if self.path.exists() { "write" } else { "create" };
        format!("{} {}", verb, self.path.display())
    }
}

/// A collection of writes to perform together.
#[derive(Debug, Default)]
pub struct Transaction {
    actions: Vec<WriteAction>,
}

impl Transaction {
    /// Creates a new empty transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a write action.
    pub fn write(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.actions.push(WriteAction::new(path, content));
    }

    /// Returns the number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if there are no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the queued actions.
    pub fn actions(&self) -> &[WriteAction] {
        &self.actions
    }

    /// Returns descriptions of the actions that would change a file.
    pub fn describe(&self) -> Vec<String> {
        self.actions
            .iter()
            .filter(|a| !a.is_unchanged())
            .map(WriteAction::describe)
            .collect()
    }

    /// Executes all actions, skipping files that are already up to date.
    ///
    /// Returns the number of files written.
    pub fn execute(&self) -> Result<usize> {
        let mut written = 0;
        for action in &self.actions {
            if action.is_unchanged() {
                tracing::debug!("Unchanged: {}", action.path.display());
                continue;
            }
            action.execute()?;
            tracing::info!("Wrote {}", action.path.display());
            written += 1;
        }
        Ok(written)
    }
}

static STAGED_WRITES: AtomicUsize = AtomicUsize::new(0);

/// Path of a hidden staging file next to `target`.
///
/// Staging in the target's own directory keeps the final rename on one
/// filesystem.
fn staging_path(target: &Path) -> PathBuf {
    let dir = target.parent().unwrap_or(Path::new("."));
    let serial = STAGED_WRITES.fetch_add(1, Ordering::Relaxed);
    dir.join(format!(".mdweb-tmp-{}-{}", std::process::id(), serial))
}

/// Replaces `path` with `content` in one step.
///
/// Readers see either the old file or the complete new one. The staging
/// file is removed again if the rename fails.
fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let staged = staging_path(path);

    let mut file = File::create(&staged)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    drop(file);

    fs::rename(&staged, path).map_err(|err| {
        let _ = fs::remove_file(&staged);
        err
    })
}
