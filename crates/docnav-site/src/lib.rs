//! Navigation tree building, lookup, and link resolution for docnav.
//!
//! This crate is the content-addressing core of the documentation site:
//! it discovers source documents across the configured roots, builds one
//! ordered hierarchical navigation tree with globally unique slugs, and
//! answers navigation queries over it.
//!
//! - [`SiteConfig`]: injected manifests (primary root, standalone root
//!   documents, aggregated sources, ordering, edit-source identity)
//! - [`TreeBuilder`]: walks the sources through a [`docnav_storage::Storage`]
//!   capability and produces the [`DocNode`] tree
//! - [`navigate`]: pure queries (lookup, flatten, breadcrumbs, prev/next)
//! - [`LinkResolver`]: author-written relative links to site URLs
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use docnav_site::{SiteConfig, TreeBuilder, navigate};
//! use docnav_storage::FsStorage;
//!
//! let config = SiteConfig {
//!     docs_root: PathBuf::from("/srv/site/docs"),
//!     ..Default::default()
//! };
//! let tree = TreeBuilder::new(Arc::new(FsStorage::new()), config).build();
//!
//! let crumbs = navigate::breadcrumbs(&tree, "guide/intro");
//! let around = navigate::adjacent(&tree, "guide/intro");
//! ```

mod config;
mod links;
pub mod navigate;
mod order;
mod tree;

pub use config::{ContentSource, EditSource, RootDoc, SiteConfig, SourceOrdering};
pub use links::LinkResolver;
pub use order::{apply_priority, apply_source_ordering};
pub use navigate::{Adjacent, FlatDoc, FlatNode};
pub use tree::{DocNode, NodeKind, TreeBuilder};

// Re-export the per-document summary types for convenience.
pub use docnav_content::{DocumentSummary, TocEntry, analyze};
