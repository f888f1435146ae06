//! Asset search path.
//!
//! An ordered, duplicate-free list of directories consulted front to back
//! when resolving a relative path such as `frontend/dist`.

use std::io;
use std::path::{Path, PathBuf};

/// Name of the backend directory placed ahead of the project root.
pub const BACKEND_DIR: &str = "backend";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search path for a project: `root/backend` first, then `root`.
    pub fn for_root(root: &Path) -> Self {
        let mut path = Self::new();
        path.insert_front(root);
        path.insert_front(root.join(BACKEND_DIR));
        path
    }

    /// Put `dir` at the front unless it is already present.
    ///
    /// Returns `false` (and leaves the order untouched) for duplicates.
    pub fn insert_front(&mut self, dir: impl Into<PathBuf>) -> bool {
        let dir = dir.into();
        if self.entries.contains(&dir) {
            return false;
        }
        self.entries.insert(0, dir);
        true
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// First `entry/relative` that exists on disk.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> Option<PathBuf> {
        let relative = relative.as_ref();
        self.entries
            .iter()
            .map(|entry| entry.join(relative))
            .find(|candidate| candidate.exists())
    }
}

/// Absolute project root: the configured directory, else the working
/// directory.
///
/// The executable's own directory is not used as a fallback: a cargo-built
/// binary lives under `target/`, away from `backend/` and `frontend/`.
pub fn project_root(configured: Option<&Path>) -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match configured {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}
