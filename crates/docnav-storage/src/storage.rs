//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for abstracting directory listing and
//! document retrieval, along with [`StorageError`] for unified error handling
//! across backends.
//!
//! # Listing Order
//!
//! `list()` returns entries in the engine's baseline display order:
//! directories first, then case-insensitive alphabetical by name. Backends
//! share [`sort_entries`] so the order never depends on the backend.

use std::path::PathBuf;

/// Directory entry returned by [`Storage::list`].
///
/// The entry kind is decided once at listing time. Consumers must branch on
/// [`EntryKind`] rather than re-inferring directory-ness from the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// File or directory name (single path component, no separators).
    pub name: String,
    /// Whether this entry is a file or a directory.
    pub kind: EntryKind,
}

/// Kind of a directory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Regular file.
    File,
    /// Directory.
    Directory,
}

impl Entry {
    /// Create a file entry.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    /// Create a directory entry.
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    /// Check if this entry is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Sort entries into baseline display order.
///
/// Directories first, then case-insensitive alphabetical by name. The sort
/// is stable, so entries that compare equal keep their incoming order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.is_directory()
            .cmp(&a.is_directory())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Path is not listable (expected a directory, found a file).
    NotADirectory,
    /// Content is not valid text.
    InvalidContent,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    /// Semantic error category.
    pub kind: StorageErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Backend identifier (e.g., "Fs", "Memory").
    pub backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            std::io::ErrorKind::NotADirectory => StorageErrorKind::NotADirectory,
            std::io::ErrorKind::InvalidData => StorageErrorKind::InvalidContent,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }

    /// Check if this error means the resource is simply absent.
    ///
    /// Absent sources are skipped by the tree builder, not reported.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::NotADirectory => "Not a directory",
            StorageErrorKind::InvalidContent => "Invalid content",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for directory listing and document retrieval.
///
/// Provides a unified interface for walking document roots regardless of
/// backend. All paths are absolute; the caller's manifests decide which
/// roots exist.
pub trait Storage: Send + Sync {
    /// List the entries of a directory in baseline display order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] with kind `NotFound` if the directory does
    /// not exist, `NotADirectory` if the path is a file.
    fn list(&self, dir: &std::path::Path) -> Result<Vec<Entry>, StorageError>;

    /// Read the full text content of a document.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the document doesn't exist or can't be read.
    fn read(&self, path: &std::path::Path) -> Result<String, StorageError>;

    /// Check if a file or directory exists at the given path.
    ///
    /// Returns `false` on errors (treats errors as "doesn't exist").
    fn exists(&self, path: &std::path::Path) -> bool;
}
