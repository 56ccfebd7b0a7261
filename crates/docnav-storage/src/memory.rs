//! In-memory storage implementation for testing.
//!
//! Provides [`MemoryStorage`] for unit testing without filesystem access.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::storage::{Entry, EntryKind, Storage, StorageError, sort_entries};

/// Backend identifier for error messages.
const BACKEND: &str = "Memory";

/// In-memory storage for testing.
///
/// Stores file contents keyed by absolute path; directories are implied by
/// the paths of the files they contain. Use the builder methods to configure
/// the storage with test data.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use docnav_storage::{MemoryStorage, Storage};
///
/// let storage = MemoryStorage::new()
///     .with_file("/docs/guide/intro.md", "# Intro");
///
/// let entries = storage.list(Path::new("/docs")).unwrap();
/// assert_eq!(entries[0].name, "guide");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryStorage {
    /// Create a new empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given absolute path and content.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Check whether `path` is an implied directory (a proper prefix of some file).
    fn is_directory(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }
}

impl Storage for MemoryStorage {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, StorageError> {
        if self.files.contains_key(dir) {
            return Err(StorageError::new(crate::StorageErrorKind::NotADirectory)
                .with_path(dir)
                .with_backend(BACKEND));
        }
        if !self.is_directory(dir) {
            return Err(StorageError::not_found(dir).with_backend(BACKEND));
        }

        let mut entries: Vec<Entry> = Vec::new();
        for file in self.files.keys() {
            let Ok(relative) = file.strip_prefix(dir) else {
                continue;
            };
            let mut components = relative.components().filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            });
            let Some(name) = components.next() else {
                continue;
            };
            let kind = if components.next().is_some() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            if !entries.iter().any(|e| e.name == name) {
                entries.push(Entry { name, kind });
            }
        }

        sort_entries(&mut entries);
        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.is_directory(path)
    }
}
