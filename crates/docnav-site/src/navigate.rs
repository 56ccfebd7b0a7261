//! Pure queries over an already-built navigation tree.
//!
//! Lookup, flattening, breadcrumbs, and sequential (prev/next) navigation.
//! All functions borrow the tree; nothing here mutates or rebuilds it.
//! Prev/next follows the tree's display order exactly, including any custom
//! ordering applied during construction.

use serde::Serialize;

use crate::tree::DocNode;

/// A tree node annotated with its nesting depth, in pre-order position.
#[derive(Clone, Copy, Debug)]
pub struct FlatNode<'a> {
    /// The node itself (directory or leaf).
    pub node: &'a DocNode,
    /// Nesting depth; top-level nodes are depth 0.
    pub depth: usize,
}

/// Title/slug projection of a leaf, used for search and display.
///
/// Carries no hierarchy information; derived, not stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlatDoc {
    /// Display title.
    pub title: String,
    /// Document slug.
    pub slug: String,
}

/// Neighbors of a document in the linear leaf sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adjacent<'a> {
    /// Preceding leaf, `None` at the start of the sequence.
    pub prev: Option<&'a DocNode>,
    /// Following leaf, `None` at the end of the sequence.
    pub next: Option<&'a DocNode>,
}

/// Find the leaf document with exactly this slug.
///
/// Depth-first search in display order; directories never match.
#[must_use]
pub fn find_by_slug<'a>(tree: &'a [DocNode], slug: &str) -> Option<&'a DocNode> {
    for node in tree {
        if !node.is_directory() && node.slug == slug {
            return Some(node);
        }
        if let Some(found) = find_by_slug(node.children(), slug) {
            return Some(found);
        }
    }
    None
}

/// Flatten the tree to a pre-order sequence of all nodes with depth.
#[must_use]
pub fn flatten(tree: &[DocNode]) -> Vec<FlatNode<'_>> {
    fn visit<'a>(nodes: &'a [DocNode], depth: usize, out: &mut Vec<FlatNode<'a>>) {
        for node in nodes {
            out.push(FlatNode { node, depth });
            visit(node.children(), depth + 1, out);
        }
    }

    let mut out = Vec::new();
    visit(tree, 0, &mut out);
    out
}

/// Project the tree's leaves to title/slug pairs in display order.
#[must_use]
pub fn flat_docs(tree: &[DocNode]) -> Vec<FlatDoc> {
    flatten(tree)
        .into_iter()
        .filter(|flat| !flat.node.is_directory())
        .map(|flat| FlatDoc {
            title: flat.node.title.clone(),
            slug: flat.node.slug.clone(),
        })
        .collect()
}

/// Breadcrumb path for a document: ancestor directories plus the target
/// leaf, in root-to-leaf order.
///
/// Returns an empty path if the slug is not found. Consumers typically drop
/// the final (self) entry to show only ancestors.
#[must_use]
pub fn breadcrumbs<'a>(tree: &'a [DocNode], slug: &str) -> Vec<&'a DocNode> {
    fn visit<'a>(nodes: &'a [DocNode], slug: &str, trail: &mut Vec<&'a DocNode>) -> bool {
        for node in nodes {
            trail.push(node);
            if !node.is_directory() && node.slug == slug {
                return true;
            }
            if visit(node.children(), slug, trail) {
                return true;
            }
            trail.pop();
        }
        false
    }

    let mut trail = Vec::new();
    if visit(tree, slug, &mut trail) {
        trail
    } else {
        Vec::new()
    }
}

/// Previous and next documents relative to a slug.
///
/// Position is taken in the linear leaf sequence (directories excluded), so
/// prev/next crosses directory boundaries in display order. Both sides are
/// `None` for an unknown slug.
#[must_use]
pub fn adjacent<'a>(tree: &'a [DocNode], slug: &str) -> Adjacent<'a> {
    let leaves: Vec<&DocNode> = flatten(tree)
        .into_iter()
        .map(|flat| flat.node)
        .filter(|node| !node.is_directory())
        .collect();

    let Some(position) = leaves.iter().position(|node| node.slug == slug) else {
        return Adjacent::default();
    };

    Adjacent {
        prev: position.checked_sub(1).map(|i| leaves[i]),
        next: leaves.get(position + 1).copied(),
    }
}
