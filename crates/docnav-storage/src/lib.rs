//! Storage abstraction for the docnav navigation engine.
//!
//! This crate provides a [`Storage`] trait for abstracting directory listing
//! and document reading from the underlying backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, anything listable tomorrow)
//! - **Clean separation** between tree-building logic and I/O operations
//!
//! # Architecture
//!
//! The crate provides:
//! - [`Storage`] trait with `list()`, `read()`, and `exists()` methods
//! - [`FsStorage`] implementation over the local filesystem
//! - [`MemoryStorage`] for testing (behind the `mock` feature flag)
//!
//! All paths are absolute; the navigation engine's manifests decide which
//! roots are walked. Listing order is part of the contract: directories
//! first, then case-insensitive alphabetical by name.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use docnav_storage::{FsStorage, Storage};
//!
//! let storage = FsStorage::new();
//! let entries = storage.list(Path::new("/srv/docs"))?;
//! for entry in entries {
//!     println!("{:?} {}", entry.kind, entry.name);
//! }
//! ```

mod fs;
#[cfg(feature = "mock")]
mod memory;
mod storage;

pub use fs::FsStorage;
#[cfg(feature = "mock")]
pub use memory::MemoryStorage;
pub use storage::{Entry, EntryKind, Storage, StorageError, StorageErrorKind, sort_entries};
