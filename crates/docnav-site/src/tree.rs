//! Navigation tree construction.
//!
//! [`TreeBuilder`] walks the configured source roots through an injected
//! [`Storage`] capability and produces a unified ordered tree of
//! [`DocNode`]s: standalone root documents first, then the primary root's
//! hierarchy, then each aggregated source under its namespace prefix.
//!
//! The tree is rebuilt fresh per request from current storage state and is
//! immutable once returned. Building never mutates the document store.
//!
//! # Failure semantics
//!
//! A missing root or source is not an error; it is skipped, yielding a
//! smaller tree. A malformed front-matter block or unreadable document is
//! recovered at single-document granularity. Nothing here aborts a build.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use docnav_content::{
    FrontMatter, format_title, is_document, parse_front_matter, path_to_slug,
    strip_document_extension,
};
use docnav_storage::{EntryKind, Storage};

use crate::config::SiteConfig;
use crate::order::apply_source_ordering;

/// File name excluded from being listed as a leaf.
///
/// A directory's readme is surfaced through the directory node itself, not
/// as a separate child entry.
const DIRECTORY_README: &str = "README.md";

/// A node in the navigation tree.
///
/// A node is either a directory (has children) or a document leaf (has a
/// backing document); [`NodeKind`] makes the two states mutually exclusive.
/// Slugs are globally unique across the whole tree for valid inputs;
/// collisions caused by slugification dropping characters are detected and
/// logged after construction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocNode {
    /// Display name, from front matter if present, else formatted from the
    /// file or directory name.
    pub title: String,
    /// Unique, stable, URL-safe path identifying this node.
    pub slug: String,
    /// Path relative to the node's originating source root. Used for
    /// ordering and diagnostics, not for routing.
    pub source_path: PathBuf,
    /// Directory or document payload.
    pub kind: NodeKind,
}

/// Directory or document payload of a [`DocNode`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum NodeKind {
    /// Grouping node; insertion order of `children` is final display order.
    Directory {
        /// Ordered child nodes.
        children: Vec<DocNode>,
    },
    /// Leaf document.
    Document {
        /// Absolute location of the backing document.
        document_path: PathBuf,
        /// Parsed metadata (defaults if absent or malformed).
        front_matter: FrontMatter,
    },
}

impl DocNode {
    /// Check if this node is a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, NodeKind::Directory { .. })
    }

    /// Children of this node; empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[DocNode] {
        match &self.kind {
            NodeKind::Directory { children } => children,
            NodeKind::Document { .. } => &[],
        }
    }

    /// Absolute path of the backing document; `None` for directories.
    #[must_use]
    pub fn document_path(&self) -> Option<&Path> {
        match &self.kind {
            NodeKind::Document { document_path, .. } => Some(document_path),
            NodeKind::Directory { .. } => None,
        }
    }

    /// Parsed front matter; `None` for directories.
    #[must_use]
    pub fn front_matter(&self) -> Option<&FrontMatter> {
        match &self.kind {
            NodeKind::Document { front_matter, .. } => Some(front_matter),
            NodeKind::Directory { .. } => None,
        }
    }
}

/// Builds the navigation tree from configured sources.
///
/// Stateless per invocation: each [`build`](Self::build) reads current
/// storage state independently, so concurrent builds are safe without
/// locking.
pub struct TreeBuilder {
    storage: Arc<dyn Storage>,
    config: SiteConfig,
}

impl TreeBuilder {
    /// Create a builder over a storage capability and manifests.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, config: SiteConfig) -> Self {
        Self { storage, config }
    }

    /// Build the full navigation tree.
    ///
    /// Order: standalone root documents (manifest order), then the primary
    /// root walk, then aggregated sources. Aggregated sources that yield no
    /// documents are omitted entirely.
    #[must_use]
    pub fn build(&self) -> Vec<DocNode> {
        let mut tree = Vec::new();

        for root_doc in &self.config.root_docs {
            if let Some(node) = self.build_root_doc(&root_doc.path, &root_doc.slug, &root_doc.title)
            {
                tree.push(node);
            }
        }

        tree.extend(self.walk(&self.config.docs_root, &self.config.docs_root, None));

        for source in &self.config.sources {
            let mut children = self.walk(&source.dir, &source.dir, Some(&source.prefix));
            if children.is_empty() {
                continue;
            }
            if let Some(ordering) = &source.ordering {
                apply_source_ordering(&mut children, ordering);
            }
            tree.push(DocNode {
                title: source.title.clone(),
                slug: source.prefix.clone(),
                source_path: PathBuf::from(&source.prefix),
                kind: NodeKind::Directory { children },
            });
        }

        warn_duplicate_slugs(&tree);
        tree
    }

    /// Build a leaf for a standalone root document, or `None` if absent.
    fn build_root_doc(&self, path: &Path, slug: &str, fallback_title: &str) -> Option<DocNode> {
        if !self.storage.exists(path) {
            return None;
        }
        let text = match self.storage.read(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, path = %path.display(), "skipping unreadable root document");
                return None;
            }
        };
        let (front_matter, _) = parse_front_matter(&text);
        let title = front_matter
            .title
            .clone()
            .unwrap_or_else(|| fallback_title.to_owned());
        let source_path = path.file_name().map(PathBuf::from).unwrap_or_default();

        Some(DocNode {
            title,
            slug: slug.to_owned(),
            source_path,
            kind: NodeKind::Document {
                document_path: path.to_path_buf(),
                front_matter,
            },
        })
    }

    /// Walk one directory recursively, in baseline display order.
    ///
    /// Returns an empty list for absent directories (missing sources are
    /// skipped, not errors). Directories whose subtree yields no documents
    /// are omitted.
    fn walk(&self, dir: &Path, root: &Path, prefix: Option<&str>) -> Vec<DocNode> {
        let entries = match self.storage.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                if !e.is_not_found() {
                    tracing::warn!(error = %e, dir = %dir.display(), "skipping unlistable directory");
                }
                return Vec::new();
            }
        };

        let mut nodes = Vec::new();
        for entry in entries {
            let full_path = dir.join(&entry.name);
            let relative = full_path
                .strip_prefix(root)
                .unwrap_or(&full_path)
                .to_path_buf();

            match entry.kind {
                EntryKind::Directory => {
                    let children = self.walk(&full_path, root, prefix);
                    if children.is_empty() {
                        continue;
                    }
                    nodes.push(DocNode {
                        title: format_title(&entry.name),
                        slug: path_to_slug(&full_path, root, prefix),
                        source_path: relative,
                        kind: NodeKind::Directory { children },
                    });
                }
                EntryKind::File => {
                    if !is_document(&entry.name) || entry.name == DIRECTORY_README {
                        continue;
                    }
                    let text = match self.storage.read(&full_path) {
                        Ok(text) => text,
                        Err(e) => {
                            tracing::warn!(error = %e, path = %full_path.display(), "skipping unreadable document");
                            continue;
                        }
                    };
                    let (front_matter, _) = parse_front_matter(&text);
                    let title = front_matter.title.clone().unwrap_or_else(|| {
                        format_title(strip_document_extension(&entry.name))
                    });
                    nodes.push(DocNode {
                        title,
                        slug: path_to_slug(&full_path, root, prefix),
                        source_path: relative,
                        kind: NodeKind::Document {
                            document_path: full_path,
                            front_matter,
                        },
                    });
                }
            }
        }

        nodes
    }
}

/// Report slug collisions across the finished tree.
///
/// Collisions come from slugification dropping characters; both nodes are
/// kept (lookups resolve to the first in display order) and the build
/// proceeds.
fn warn_duplicate_slugs(tree: &[DocNode]) {
    fn visit<'a>(nodes: &'a [DocNode], seen: &mut HashMap<&'a str, &'a Path>) {
        for node in nodes {
            if let Some(first) = seen.insert(&node.slug, &node.source_path) {
                tracing::warn!(
                    slug = %node.slug,
                    first = %first.display(),
                    second = %node.source_path.display(),
                    "duplicate slug in navigation tree"
                );
            }
            visit(node.children(), seen);
        }
    }

    let mut seen = HashMap::new();
    visit(tree, &mut seen);
}
