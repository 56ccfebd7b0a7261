//! Slug codec: source path segments to URL-safe tokens.
//!
//! Slugs are derived deterministically from source paths so that every
//! consumer (routing, navigation, link resolution) agrees on a document's
//! address. [`slugify_segment`] is idempotent: applying it to its own output
//! is a no-op.
//!
//! Characters outside the safe set are dropped, not escaped. Two source
//! names that differ only in dropped characters therefore collide; the tree
//! builder detects and reports such collisions after construction.

use std::path::{Component, Path};

/// Recognized document file extensions (lowercase, without the dot).
pub const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Slugify a single path segment (no separators).
///
/// Lowercases, maps underscores and `+` to spaces, drops any character
/// outside `[a-z0-9 -]`, collapses whitespace and dash runs to a single
/// dash, and trims leading/trailing dashes.
///
/// # Examples
///
/// ```
/// use docnav_content::slugify_segment;
///
/// assert_eq!(slugify_segment("Hadoop_Installation (for Mac)"), "hadoop-installation-for-mac");
/// assert_eq!(slugify_segment("s3+spark"), "s3-spark");
/// assert_eq!(slugify_segment("--Already-Slugged--"), "already-slugged");
/// ```
#[must_use]
pub fn slugify_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut pending_dash = false;

    for c in segment.chars() {
        let c = match c {
            '_' | '+' => ' ',
            other => other,
        };
        if c.is_whitespace() || c == '-' {
            pending_dash = true;
            continue;
        }
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        }
        // Anything else is dropped for URL safety.
    }

    out
}

/// Convert a source path to a full slug.
///
/// Takes the path relative to `root`, strips a trailing document extension,
/// slugifies every component independently, joins with `/`, and prepends
/// `prefix + "/"` when a namespace prefix is given.
///
/// If `path` is not under `root` it is slugified as-is.
#[must_use]
pub fn path_to_slug(path: &Path, root: &Path, prefix: Option<&str>) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let components: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let mut parts = Vec::with_capacity(components.len());
    for (i, component) in components.iter().enumerate() {
        let segment = if i + 1 == components.len() {
            strip_document_extension(component)
        } else {
            component.as_str()
        };
        parts.push(slugify_segment(segment));
    }
    let joined = parts.join("/");

    match prefix {
        Some(p) => format!("{p}/{joined}"),
        None => joined,
    }
}

/// Check if a file name has a recognized document extension.
#[must_use]
pub fn is_document(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| DOC_EXTENSIONS.iter().any(|d| ext.eq_ignore_ascii_case(d)))
}

/// Strip a trailing document extension from a file name, if present.
#[must_use]
pub fn strip_document_extension(name: &str) -> &str {
    for ext in DOC_EXTENSIONS {
        let suffix_len = ext.len() + 1;
        if name.len() > suffix_len
            && name[name.len() - suffix_len..].eq_ignore_ascii_case(&format!(".{ext}"))
        {
            return &name[..name.len() - suffix_len];
        }
    }
    name
}

/// Format a folder or file name into a readable display title.
///
/// Hyphens and underscores become spaces and the first letter of each word
/// is capitalized. Used when a document carries no front-matter title.
///
/// # Examples
///
/// ```
/// use docnav_content::format_title;
///
/// assert_eq!(format_title("getting-started"), "Getting Started");
/// assert_eq!(format_title("spark_overview"), "Spark Overview");
/// ```
#[must_use]
pub fn format_title(name: &str) -> String {
    let spaced = name.replace(['-', '_'], " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_alnum = false;

    for c in spaced.chars() {
        if c.is_alphanumeric() {
            if prev_alnum {
                out.push(c);
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alnum = true;
        } else {
            out.push(c);
            prev_alnum = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_slugify_segment_basic() {
        assert_eq!(slugify_segment("Hello World"), "hello-world");
        assert_eq!(slugify_segment("MapReduce Overview"), "mapreduce-overview");
        assert_eq!(slugify_segment("What is Big Data"), "what-is-big-data");
    }

    #[test]
    fn test_slugify_segment_underscores_and_plus() {
        assert_eq!(slugify_segment("Syllabus_Outline"), "syllabus-outline");
        assert_eq!(slugify_segment("s3+spark (for MAC)"), "s3-spark-for-mac");
        assert_eq!(slugify_segment("AWS Setup + S3"), "aws-setup-s3");
    }

    #[test]
    fn test_slugify_segment_dropped_characters_leave_no_break() {
        // A dropped character between letters does not split the word.
        assert_eq!(slugify_segment("s3+spark(for MAC)"), "s3-sparkfor-mac");
        assert_eq!(
            slugify_segment("Hadoop_Installation(for Mac)"),
            "hadoop-installationfor-mac"
        );
    }

    #[test]
    fn test_slugify_segment_drops_special_characters() {
        assert_eq!(slugify_segment("Big Data ( Full Course)"), "big-data-full-course");
        assert_eq!(slugify_segment("What's New?"), "whats-new");
        assert_eq!(slugify_segment("??!"), "");
    }

    #[test]
    fn test_slugify_segment_collapses_and_trims_dashes() {
        assert_eq!(slugify_segment("a---b"), "a-b");
        assert_eq!(slugify_segment("--edges--"), "edges");
        assert_eq!(slugify_segment("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_slugify_segment_idempotent() {
        for input in [
            "Hadoop Essential Commands (HDFS)",
            "install_hadoop_spark_mac",
            "Practice Questions Set 1",
            "déjà-vu",
            "already-slugged",
        ] {
            let once = slugify_segment(input);
            assert_eq!(slugify_segment(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_path_to_slug_relative_to_root() {
        let slug = path_to_slug(
            Path::new("/docs/guide/Getting Started.md"),
            Path::new("/docs"),
            None,
        );
        assert_eq!(slug, "guide/getting-started");
    }

    #[test]
    fn test_path_to_slug_with_prefix() {
        let slug = path_to_slug(
            Path::new("/units/unit2/b.md"),
            Path::new("/units"),
            Some("units"),
        );
        assert_eq!(slug, "units/unit2/b");
    }

    #[test]
    fn test_path_to_slug_strips_only_document_extension() {
        assert_eq!(
            path_to_slug(Path::new("notes/v1.0/setup.mdx"), Path::new(""), None),
            "notes/v10/setup"
        );
        assert_eq!(
            path_to_slug(Path::new("archive.tar"), Path::new(""), None),
            "archivetar"
        );
    }

    #[test]
    fn test_path_to_slug_outside_root_slugified_as_is() {
        let slug = path_to_slug(Path::new("/elsewhere/doc.md"), Path::new("/docs"), None);
        assert_eq!(slug, "elsewhere/doc");
    }

    #[test]
    fn test_is_document() {
        assert!(is_document("guide.md"));
        assert!(is_document("guide.MD"));
        assert!(is_document("page.mdx"));
        assert!(!is_document("image.png"));
        assert!(!is_document("Makefile"));
        assert!(!is_document(".md"));
    }

    #[test]
    fn test_strip_document_extension() {
        assert_eq!(strip_document_extension("guide.md"), "guide");
        assert_eq!(strip_document_extension("page.MDX"), "page");
        assert_eq!(strip_document_extension("image.png"), "image.png");
        assert_eq!(strip_document_extension(".md"), ".md");
    }

    #[test]
    fn test_format_title() {
        assert_eq!(format_title("getting-started"), "Getting Started");
        assert_eq!(format_title("intro"), "Intro");
        assert_eq!(format_title("spark_overview"), "Spark Overview");
        assert_eq!(format_title("s3 setup"), "S3 Setup");
    }
}
