//! Front-matter parsing.
//!
//! A document is an optional YAML metadata block fenced by `---` lines,
//! followed by body text. Known keys are typed; everything else passes
//! through opaquely for the renderer to use.
//!
//! Parsing fails soft: a malformed block is logged and the document
//! proceeds with default metadata. The failure unit is one document,
//! never the build.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed front-matter metadata.
///
/// All fields are optional. When a field is `None`, the metadata was not
/// explicitly set for this document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Document title (overrides the filename-derived title).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document description for display in navigation or search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication or revision date, kept as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Document author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Untyped passthrough keys for the renderer.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front matter from YAML block content.
    ///
    /// Empty content returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(content: &str) -> Result<Self, FrontMatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(trimmed).map_err(FrontMatterError::Parse)
    }

    /// Check if the metadata has any non-default values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.author.is_none()
            && self.extra.is_empty()
    }
}

/// Error type for front-matter operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    /// YAML parsing error.
    #[error("invalid front matter: {0}")]
    Parse(#[source] serde_yaml::Error),
}

/// Split a document into its front-matter block and body.
///
/// The block must start at the first byte with a `---` fence line and end
/// with a closing `---` line. Returns `None` if there is no valid fence
/// pair, in which case the whole text is body.
#[must_use]
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']).trim() == "---" {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }
    None
}

/// Parse a document into front matter and body, failing soft.
///
/// A document without a fence returns default metadata and the full text as
/// body. A malformed block logs a warning and returns default metadata with
/// the fenced block stripped.
#[must_use]
pub fn parse_front_matter(text: &str) -> (FrontMatter, &str) {
    let Some((block, body)) = split_front_matter(text) else {
        return (FrontMatter::default(), text);
    };

    match FrontMatter::from_yaml(block) {
        Ok(front_matter) => (front_matter, body),
        Err(e) => {
            tracing::warn!(error = %e, "malformed front matter, using defaults");
            (FrontMatter::default(), body)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_front_matter() {
        let text = "---\ntitle: Hello\n---\nBody text.";

        let (block, body) = split_front_matter(text).unwrap();

        assert_eq!(block, "title: Hello\n");
        assert_eq!(body, "Body text.");
    }

    #[test]
    fn test_split_front_matter_no_fence() {
        assert!(split_front_matter("# Just a heading").is_none());
    }

    #[test]
    fn test_split_front_matter_unclosed_fence() {
        assert!(split_front_matter("---\ntitle: Hello\nBody").is_none());
    }

    #[test]
    fn test_split_front_matter_crlf() {
        let text = "---\r\ntitle: Hello\r\n---\r\nBody";

        let (block, body) = split_front_matter(text).unwrap();

        assert_eq!(block, "title: Hello\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_front_matter_typed_fields() {
        let text = "---\ntitle: Getting Started\ndescription: First steps\ndate: 2024-03-01\nauthor: NK\n---\n# Body";

        let (fm, body) = parse_front_matter(text);

        assert_eq!(fm.title.as_deref(), Some("Getting Started"));
        assert_eq!(fm.description.as_deref(), Some("First steps"));
        assert_eq!(fm.date.as_deref(), Some("2024-03-01"));
        assert_eq!(fm.author.as_deref(), Some("NK"));
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_parse_front_matter_extra_keys_pass_through() {
        let text = "---\ntitle: T\ntags:\n  - spark\n  - hdfs\ndraft: true\n---\nBody";

        let (fm, _) = parse_front_matter(text);

        assert_eq!(fm.extra.len(), 2);
        assert_eq!(
            fm.extra.get("draft"),
            Some(&serde_yaml::Value::Bool(true))
        );
        assert!(fm.extra.contains_key("tags"));
    }

    #[test]
    fn test_parse_front_matter_missing_block() {
        let (fm, body) = parse_front_matter("no front matter here");

        assert!(fm.is_empty());
        assert_eq!(body, "no front matter here");
    }

    #[test]
    fn test_parse_front_matter_malformed_fails_soft() {
        let text = "---\ntitle: [unclosed\n---\nBody survives";

        let (fm, body) = parse_front_matter(text);

        assert!(fm.is_empty());
        assert_eq!(body, "Body survives");
    }

    #[test]
    fn test_from_yaml_empty_is_default() {
        let fm = FrontMatter::from_yaml("  \n").unwrap();

        assert!(fm.is_empty());
    }
}
