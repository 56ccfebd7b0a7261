//! Slug codec, front matter, and heading extraction for docnav.
//!
//! Pure text transforms shared by the tree builder and the rendering
//! collaborators:
//!
//! - [`slugify_segment`] / [`path_to_slug`]: source paths to URL-safe slugs
//! - [`parse_front_matter`]: fail-soft YAML metadata extraction
//! - [`extract_toc`] / [`reading_time`]: per-document structural summaries
//! - [`analyze`]: the bundled summary handed to the renderer
//!
//! Everything here operates on in-memory strings; no module in this crate
//! touches the filesystem.

mod frontmatter;
mod slug;
mod toc;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use frontmatter::{FrontMatter, FrontMatterError, parse_front_matter, split_front_matter};
pub use slug::{
    DOC_EXTENSIONS, format_title, is_document, path_to_slug, slugify_segment,
    strip_document_extension,
};
pub use toc::{TocEntry, extract_toc, reading_time, strip_inline_markup};

/// A "### Topics" heading plus its immediately following list lines.
static TOPICS_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^###[ \t]+Topics[ \t]*\n(?:[ \t]*(?:\d+[.)-]|[-*+])[ \t]+[^\n]*\n)*[ \t]*\n?")
        .unwrap()
});

/// Structural summary of one document.
///
/// Derived fresh per render; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentSummary {
    /// Parsed metadata block (defaults if absent or malformed).
    pub front_matter: FrontMatter,
    /// Body text with the front-matter block stripped.
    pub body: String,
    /// Table of contents (level-2 and level-3 headings).
    pub toc: Vec<TocEntry>,
    /// Estimated reading time in minutes.
    pub reading_time_minutes: u32,
}

/// Analyze raw document text into its structural summary.
#[must_use]
pub fn analyze(text: &str) -> DocumentSummary {
    let (front_matter, body) = parse_front_matter(text);
    DocumentSummary {
        toc: extract_toc(body),
        reading_time_minutes: reading_time(body),
        front_matter,
        body: body.to_owned(),
    }
}

/// Strip the first "### Topics" section (heading plus list) from content.
///
/// Removes the heading and all immediately following list lines (numbered or
/// bulleted) without modifying the source document. Content other than the
/// section is returned unchanged.
#[must_use]
pub fn strip_topics_section(content: &str) -> String {
    TOPICS_SECTION_RE.replace(content, "").into_owned()
}
