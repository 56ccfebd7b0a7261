//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading documents from the local filesystem.
//! The tree builder rebuilds per request, so there is no caching layer here;
//! a build is a bounded local walk.

use std::fs;
use std::path::Path;

use crate::storage::{Entry, EntryKind, Storage, StorageError, sort_entries};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Lists directories and reads documents with `std::fs`. Paths are absolute,
/// supplied by the navigation engine's manifests.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use docnav_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new();
/// let entries = storage.list(Path::new("/srv/docs"))?;
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct FsStorage;

impl FsStorage {
    /// Create a new filesystem storage.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Storage for FsStorage {
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, StorageError> {
        let read_dir = fs::read_dir(dir)
            .map_err(|e| StorageError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND))?;

        let mut entries: Vec<Entry> = read_dir
            .filter_map(Result::ok)
            .filter_map(|e| {
                let kind = match e.file_type() {
                    Ok(t) if t.is_dir() => EntryKind::Directory,
                    Ok(_) => EntryKind::File,
                    Err(err) => {
                        // Entries with unreadable types are skipped, not fatal.
                        tracing::warn!(
                            error = %err,
                            name = %e.file_name().to_string_lossy(),
                            "skipping entry with unreadable file type"
                        );
                        return None;
                    }
                };
                Some(Entry {
                    name: e.file_name().to_string_lossy().into_owned(),
                    kind,
                })
            })
            .collect();

        sort_entries(&mut entries);
        Ok(entries)
    }

    fn read(&self, path: &Path) -> Result<String, StorageError> {
        fs::read_to_string(path)
            .map_err(|e| StorageError::io(e, Some(path.to_path_buf())).with_backend(BACKEND))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
