//! Site configuration manifests.
//!
//! Every source the tree builder consults is declared here and injected at
//! construction time: the primary document root, standalone root documents,
//! and aggregated external sources with their namespace prefixes and
//! optional custom ordering. Nothing in the engine reads a hardcoded path.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

fn default_base_path() -> String {
    "/docs".to_owned()
}

/// Configuration for the navigation engine.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteConfig {
    /// Primary document root, walked recursively.
    pub docs_root: PathBuf,
    /// Standalone documents inserted at the very front of the tree,
    /// in manifest order.
    #[serde(default)]
    pub root_docs: Vec<RootDoc>,
    /// Aggregated external sources appended after the primary walk.
    #[serde(default)]
    pub sources: Vec<ContentSource>,
    /// URL prefix under which document slugs are routed (default `/docs`).
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Edit-source URL template, if the site links to its forge.
    #[serde(default)]
    pub edit_source: Option<EditSource>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::new(),
            root_docs: Vec::new(),
            sources: Vec::new(),
            base_path: default_base_path(),
            edit_source: None,
        }
    }
}

/// A standalone document living outside the primary root.
#[derive(Clone, Debug, Deserialize)]
pub struct RootDoc {
    /// Absolute path of the backing document.
    pub path: PathBuf,
    /// Fixed slug for this document.
    pub slug: String,
    /// Display title (overridden by front matter if present).
    pub title: String,
}

/// An aggregated external directory merged into the tree under a namespace.
#[derive(Clone, Debug, Deserialize)]
pub struct ContentSource {
    /// Absolute path of the source directory.
    pub dir: PathBuf,
    /// Namespace prefix prepended to every slug from this source.
    pub prefix: String,
    /// Display title of the top-level category node.
    pub title: String,
    /// Custom ordering, when this source should not use filesystem order.
    #[serde(default)]
    pub ordering: Option<SourceOrdering>,
}

/// Priority ordering for one aggregated source.
///
/// Names are matched against base file/directory names after normalization
/// (lowercase, non-alphanumerics stripped). Unlisted entries keep their
/// relative filesystem order after all listed ones.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SourceOrdering {
    /// Declared order of the source's top-level entries.
    #[serde(default)]
    pub top_level: Vec<String>,
    /// Per-category file order, keyed by category directory name.
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
}

/// Edit-source URL template.
///
/// Pure string construction from a fixed repository/branch identity; no
/// network calls.
#[derive(Clone, Debug, Deserialize)]
pub struct EditSource {
    /// Repository identity, e.g. `"acme/survival-guide"`.
    pub repo: String,
    /// Branch name, e.g. `"main"`.
    pub branch: String,
    /// Workspace root that document paths are made relative to.
    pub workspace_root: PathBuf,
}

impl EditSource {
    /// Build the edit URL for a document path.
    #[must_use]
    pub fn url_for(&self, document_path: &Path) -> String {
        let relative = document_path
            .strip_prefix(&self.workspace_root)
            .unwrap_or(document_path);
        let joined = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");
        format!(
            "https://github.com/{}/edit/{}/{joined}",
            self.repo, self.branch
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_base_path_is_docs() {
        let config = SiteConfig::default();

        assert_eq!(config.base_path, "/docs");
    }

    #[test]
    fn test_edit_source_url() {
        let edit = EditSource {
            repo: "acme/survival-guide".to_owned(),
            branch: "main".to_owned(),
            workspace_root: PathBuf::from("/srv/site"),
        };

        assert_eq!(
            edit.url_for(Path::new("/srv/site/docs/guide/intro.md")),
            "https://github.com/acme/survival-guide/edit/main/docs/guide/intro.md"
        );
    }

    #[test]
    fn test_edit_source_url_outside_workspace() {
        let edit = EditSource {
            repo: "acme/survival-guide".to_owned(),
            branch: "main".to_owned(),
            workspace_root: PathBuf::from("/srv/site"),
        };

        // Paths outside the workspace are used as-is, minus the root.
        assert_eq!(
            edit.url_for(Path::new("/elsewhere/doc.md")),
            "https://github.com/acme/survival-guide/edit/main/elsewhere/doc.md"
        );
    }

    #[test]
    fn test_config_deserializes_from_yaml() {
        let yaml = r#"
docs_root: /srv/site/docs
root_docs:
  - path: /srv/site/README.md
    slug: readme
    title: Introduction
sources:
  - dir: /srv/site/units
    prefix: units
    title: Units
  - dir: "/srv/site/Big Data ( Full Course)"
    prefix: big-data
    title: Big Data Course
    ordering:
      top_level: [Fundamentals, Installation]
      categories:
        Fundamentals: [What is Big Data, Linux Basics]
"#;

        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.base_path, "/docs");
        assert_eq!(config.root_docs.len(), 1);
        assert_eq!(config.sources.len(), 2);
        let ordering = config.sources[1].ordering.as_ref().unwrap();
        assert_eq!(ordering.top_level, vec!["Fundamentals", "Installation"]);
        assert_eq!(
            ordering.categories.get("Fundamentals").unwrap().len(),
            2
        );
    }
}
