//! Priority ordering for aggregated sources.
//!
//! A source flagged for custom ordering declares its entries by name; the
//! comparator places declared entries first, in declared order, and leaves
//! everything else in its original relative order afterwards. Applied at two
//! nesting levels: a source's top-level entries, and the files inside each
//! category directory that has a configured list.

use docnav_content::strip_document_extension;

use crate::config::SourceOrdering;
use crate::tree::{DocNode, NodeKind};

/// Normalize a name for priority-list matching.
///
/// Lowercases and strips everything that is not ASCII alphanumeric, so that
/// `"Hadoop_Installation(for Mac)"` and `"hadoop installation for mac"`
/// match the same list entry.
fn normalize_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Base name of a node for ordering: file name without document extension.
fn node_key(node: &DocNode) -> String {
    let base = node
        .source_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    normalize_key(strip_document_extension(&base))
}

/// Reorder nodes by a priority list.
///
/// Matched nodes sort by list index; unmatched nodes sort after all matched
/// ones. The sort is stable, so unmatched nodes (and nodes matching the same
/// index) keep their original relative order.
pub fn apply_priority(nodes: &mut [DocNode], priority: &[String]) {
    let order: Vec<String> = priority.iter().map(|name| normalize_key(name)).collect();

    nodes.sort_by_key(|node| {
        let key = node_key(node);
        order.iter().position(|entry| *entry == key).unwrap_or(usize::MAX)
    });
}

/// Apply a source's two-level ordering.
///
/// Reorders the top-level entries, then the files within each category
/// directory that has a configured list. Categories without a list keep
/// filesystem order.
pub fn apply_source_ordering(children: &mut [DocNode], ordering: &SourceOrdering) {
    apply_priority(children, &ordering.top_level);

    for child in children.iter_mut() {
        let dir_name = child
            .source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if let NodeKind::Directory { children: files } = &mut child.kind
            && let Some(list) = ordering.categories.get(&dir_name)
        {
            apply_priority(files, list);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn leaf(name: &str) -> DocNode {
        DocNode {
            title: name.to_owned(),
            slug: name.to_lowercase(),
            source_path: PathBuf::from(format!("{name}.md")),
            kind: NodeKind::Document {
                document_path: PathBuf::from(format!("/src/{name}.md")),
                front_matter: docnav_content::FrontMatter::default(),
            },
        }
    }

    fn directory(name: &str, children: Vec<DocNode>) -> DocNode {
        DocNode {
            title: name.to_owned(),
            slug: name.to_lowercase(),
            source_path: PathBuf::from(name),
            kind: NodeKind::Directory { children },
        }
    }

    fn names(nodes: &[DocNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn test_apply_priority_matched_first_in_list_order() {
        let mut nodes = vec![leaf("a"), leaf("c"), leaf("b")];

        apply_priority(&mut nodes, &["b".to_owned(), "a".to_owned()]);

        assert_eq!(names(&nodes), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_apply_priority_unmatched_keep_relative_order() {
        let mut nodes = vec![leaf("x"), leaf("b"), leaf("y"), leaf("z")];

        apply_priority(&mut nodes, &["b".to_owned()]);

        assert_eq!(names(&nodes), vec!["b", "x", "y", "z"]);
    }

    #[test]
    fn test_apply_priority_normalizes_names() {
        let mut nodes = vec![leaf("Linux Basics"), leaf("Pre_Topics")];

        apply_priority(
            &mut nodes,
            &["pre-topics".to_owned(), "LINUX BASICS".to_owned()],
        );

        assert_eq!(names(&nodes), vec!["Pre_Topics", "Linux Basics"]);
    }

    #[test]
    fn test_apply_source_ordering_two_levels() {
        let mut children = vec![
            directory("Spark", vec![leaf("Spark Overview"), leaf("Spark Setup")]),
            directory("Hadoop", vec![leaf("MapReduce Overview"), leaf("Hadoop Ecosystem")]),
            leaf("Readme"),
            leaf("Course Outline"),
        ];
        let ordering = SourceOrdering {
            top_level: vec![
                "Course Outline".to_owned(),
                "Readme".to_owned(),
                "Hadoop".to_owned(),
                "Spark".to_owned(),
            ],
            categories: [(
                "Hadoop".to_owned(),
                vec!["Hadoop Ecosystem".to_owned(), "MapReduce Overview".to_owned()],
            )]
            .into(),
        };

        apply_source_ordering(&mut children, &ordering);

        assert_eq!(
            names(&children),
            vec!["Course Outline", "Readme", "Hadoop", "Spark"]
        );
        // Hadoop files reordered by its category list.
        assert_eq!(
            names(children[2].children()),
            vec!["Hadoop Ecosystem", "MapReduce Overview"]
        );
        // Spark has no category list: filesystem order kept.
        assert_eq!(
            names(children[3].children()),
            vec!["Spark Overview", "Spark Setup"]
        );
    }
}
