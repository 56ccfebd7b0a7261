//! Cross-document link resolution.
//!
//! Rewrites author-written link targets (relative paths to other source
//! markdown files) into the site's slug-based URL form. Resolution is purely
//! lexical: the site is statically generated, so the same (target,
//! containing-document) pair must always yield the same URL, and nothing is
//! re-validated at click time.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use percent_encoding::percent_decode_str;

use docnav_content::{is_document, path_to_slug};

use crate::config::SiteConfig;

/// Resolves document-relative link targets to site URLs.
///
/// Built once from the site manifests; the alias table for standalone root
/// documents is derived from the same `root_docs` manifest the tree builder
/// uses, so the two cannot drift apart.
#[derive(Debug)]
pub struct LinkResolver {
    base_path: String,
    /// Aggregated source directories with their namespace prefixes.
    sources: Vec<(PathBuf, String)>,
    /// Lowercased root-document basenames to their fixed URLs.
    aliases: HashMap<String, String>,
}

impl LinkResolver {
    /// Build a resolver from the site configuration.
    #[must_use]
    pub fn new(config: &SiteConfig) -> Self {
        let sources = config
            .sources
            .iter()
            .map(|s| (s.dir.clone(), s.prefix.clone()))
            .collect();

        let aliases = config
            .root_docs
            .iter()
            .filter_map(|doc| {
                let basename = doc.path.file_name()?.to_string_lossy().to_lowercase();
                Some((basename, format!("{}/{}", config.base_path, doc.slug)))
            })
            .collect();

        Self {
            base_path: config.base_path.clone(),
            sources,
            aliases,
        }
    }

    /// Resolve an author-written link target against its containing document.
    ///
    /// Absolute URLs, site-absolute paths, same-document anchors, and
    /// non-document targets pass through unchanged. Document targets are
    /// percent-decoded, resolved lexically against the containing document's
    /// directory, and rewritten to a slug-based URL; a target outside all
    /// known roots falls back to a slugified guess rather than failing.
    #[must_use]
    pub fn resolve(&self, target: &str, containing_doc: &Path) -> String {
        if target.is_empty()
            || target.starts_with("http")
            || target.starts_with('/')
            || target.starts_with('#')
        {
            return target.to_owned();
        }
        if !is_document_target(target) {
            return target.to_owned();
        }

        let decoded = percent_decode_str(target).decode_utf8_lossy();
        let (file_part, fragment) = split_fragment(&decoded);

        let base_dir = containing_doc.parent().unwrap_or_else(|| Path::new(""));
        let resolved = lexical_resolve(base_dir, Path::new(file_part));

        for (dir, prefix) in &self.sources {
            if let Ok(relative) = resolved.strip_prefix(dir) {
                let slug = path_to_slug(relative, Path::new(""), Some(prefix));
                return format!("{}/{slug}{fragment}", self.base_path);
            }
        }

        if let Some(basename) = resolved.file_name() {
            let key = basename.to_string_lossy().to_lowercase();
            if let Some(url) = self.aliases.get(&key) {
                return format!("{url}{fragment}");
            }
        }

        // Best-effort guess for paths outside all known roots.
        let slug = path_to_slug(&resolved, Path::new(""), None);
        format!("{}/{slug}{fragment}", self.base_path)
    }
}

/// Check if a link target references a source document.
fn is_document_target(target: &str) -> bool {
    let file_part = target.split('#').next().unwrap_or(target);
    let basename = file_part.rsplit('/').next().unwrap_or(file_part);
    is_document(basename)
}

/// Split a decoded target into file part and `#fragment` (fragment keeps
/// its leading `#`; empty when absent).
fn split_fragment(target: &str) -> (&str, &str) {
    match target.find('#') {
        Some(idx) => (&target[..idx], &target[idx..]),
        None => (target, ""),
    }
}

/// Resolve `target` against `base_dir` without touching the filesystem.
///
/// Handles `.` and `..` components lexically; `..` at the root is dropped.
fn lexical_resolve(base_dir: &Path, target: &Path) -> PathBuf {
    let mut resolved = base_dir.to_path_buf();
    for component in target.components() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            Component::Normal(segment) => resolved.push(segment),
            Component::RootDir | Component::Prefix(_) => resolved = PathBuf::from("/"),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::config::{ContentSource, RootDoc};

    use super::*;

    fn resolver() -> LinkResolver {
        let config = SiteConfig {
            docs_root: PathBuf::from("/site/docs"),
            root_docs: vec![
                RootDoc {
                    path: PathBuf::from("/site/README.md"),
                    slug: "readme".to_owned(),
                    title: "Introduction".to_owned(),
                },
                RootDoc {
                    path: PathBuf::from("/site/Syllabus_Outline.md"),
                    slug: "syllabus".to_owned(),
                    title: "Syllabus Outline".to_owned(),
                },
            ],
            sources: vec![ContentSource {
                dir: PathBuf::from("/site/units"),
                prefix: "units".to_owned(),
                title: "Units".to_owned(),
                ordering: None,
            }],
            ..Default::default()
        };
        LinkResolver::new(&config)
    }

    #[test]
    fn test_pass_through_external_absolute_and_anchor() {
        let r = resolver();
        let doc = Path::new("/site/units/unit1/a.md");

        assert_eq!(
            r.resolve("https://example.test/page", doc),
            "https://example.test/page"
        );
        assert_eq!(r.resolve("/docs/readme", doc), "/docs/readme");
        assert_eq!(r.resolve("#setup", doc), "#setup");
    }

    #[test]
    fn test_pass_through_non_document_targets() {
        let r = resolver();
        let doc = Path::new("/site/units/unit1/a.md");

        assert_eq!(r.resolve("diagram.png", doc), "diagram.png");
        assert_eq!(r.resolve("../assets/chart.svg", doc), "../assets/chart.svg");
    }

    #[test]
    fn test_resolve_within_aggregated_source_with_fragment() {
        let r = resolver();

        let url = r.resolve("../unit2/b.md#setup", Path::new("/site/units/unit1/a.md"));

        assert_eq!(url, "/docs/units/unit2/b#setup");
    }

    #[test]
    fn test_resolve_sibling_document() {
        let r = resolver();

        let url = r.resolve("b.md", Path::new("/site/units/unit1/a.md"));

        assert_eq!(url, "/docs/units/unit1/b");
    }

    #[test]
    fn test_resolve_percent_encoded_target() {
        let r = resolver();

        let url = r.resolve(
            "What%20is%20Big%20Data.md",
            Path::new("/site/units/unit1/a.md"),
        );

        assert_eq!(url, "/docs/units/unit1/what-is-big-data");
    }

    #[test]
    fn test_resolve_root_document_alias_case_insensitive() {
        let r = resolver();
        let doc = Path::new("/site/units/unit1/a.md");

        assert_eq!(r.resolve("../../README.md", doc), "/docs/readme");
        assert_eq!(r.resolve("../../readme.md", doc), "/docs/readme");
        assert_eq!(
            r.resolve("../../Syllabus_Outline.md#week-1", doc),
            "/docs/syllabus#week-1"
        );
    }

    #[test]
    fn test_resolve_outside_known_roots_falls_back() {
        let r = resolver();

        let url = r.resolve("../../Other Notes/draft.md", Path::new("/site/units/unit1/a.md"));

        assert_eq!(url, "/docs/site/other-notes/draft");
    }

    #[test]
    fn test_resolve_is_referentially_transparent() {
        let r = resolver();
        let doc = Path::new("/site/units/unit1/a.md");

        let first = r.resolve("../unit2/b.md#setup", doc);
        let second = r.resolve("../unit2/b.md#setup", doc);

        assert_eq!(first, second);
    }

    #[test]
    fn test_lexical_resolve() {
        assert_eq!(
            lexical_resolve(Path::new("/a/b"), Path::new("../c/d.md")),
            PathBuf::from("/a/c/d.md")
        );
        assert_eq!(
            lexical_resolve(Path::new("/a"), Path::new("./x.md")),
            PathBuf::from("/a/x.md")
        );
        assert_eq!(
            lexical_resolve(Path::new("/"), Path::new("../x.md")),
            PathBuf::from("/x.md")
        );
    }
}
