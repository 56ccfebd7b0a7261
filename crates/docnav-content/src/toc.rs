//! Heading extraction, anchor ids, and reading time.
//!
//! The extractor scans document text line by line for ATX headings and
//! assigns each one the anchor id the rendering pipeline will assign during
//! its own autolinking pass. The two passes must agree exactly or in-page
//! "jump to heading" links silently 404.
//!
//! Dedup counters span ALL heading levels in document order, even though the
//! table of contents surfaces only levels 2 and 3: a level-4 repeat of a
//! heading still consumes a counter in the renderer's pass.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Words per minute used for reading-time estimates.
const WORDS_PER_MINUTE: usize = 200;

/// Heading levels surfaced in the table of contents.
///
/// Level 1 is the document title; levels 4-6 are too granular for a side TOC.
const TOC_LEVELS: std::ops::RangeInclusive<u8> = 2..=3;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

/// Inline markup stripping passes, applied once each in fixed order.
///
/// Each pattern is substituted in a single pass, not iteratively re-scanned;
/// the order matches the rendering pipeline's own text extraction.
static INLINE_MARKUP: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\*\*(.+?)\*\*").unwrap(), "$1"), // **bold**
        (Regex::new(r"\*(.+?)\*").unwrap(), "$1"),     // *italic*
        (Regex::new(r"__(.+?)__").unwrap(), "$1"),     // __bold__
        (Regex::new(r"_(.+?)_").unwrap(), "$1"),       // _italic_
        (Regex::new(r"~~(.+?)~~").unwrap(), "$1"),     // ~~strikethrough~~
        (Regex::new(r"`(.+?)`").unwrap(), "$1"),       // `code`
        (Regex::new(r"\[(.+?)\]\(.+?\)").unwrap(), "$1"), // [link](url)
    ]
});

/// Table of contents entry.
///
/// The `id` is unique within one document only, derived per extraction and
/// never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Anchor id for in-page links.
    pub id: String,
    /// Heading level (2 or 3 in TOC output).
    pub level: u8,
    /// Heading text with inline markup stripped.
    pub text: String,
}

/// Extract the table of contents from document body text.
///
/// Scans every heading (levels 1-6) in document order so dedup counters
/// match the renderer, then returns only level-2 and level-3 entries.
#[must_use]
pub fn extract_toc(body: &str) -> Vec<TocEntry> {
    let mut seen_ids: HashMap<String, usize> = HashMap::new();
    let mut toc = Vec::new();

    for line in body.lines() {
        let Some(caps) = HEADING_RE.captures(line) else {
            continue;
        };
        let level = u8::try_from(caps[1].len()).unwrap_or(6);
        let text = strip_inline_markup(&caps[2]);
        let id = dedup_id(anchor_base(&text), &mut seen_ids);

        if TOC_LEVELS.contains(&level) {
            toc.push(TocEntry { id, level, text });
        }
    }

    toc
}

/// Strip recognized inline markup from heading text.
///
/// Bold, italic, strikethrough, inline code, and link syntax are each
/// replaced once via a single substitution pass, then the result is trimmed.
#[must_use]
pub fn strip_inline_markup(text: &str) -> String {
    let mut result = text.to_owned();
    for (pattern, replacement) in INLINE_MARKUP.iter() {
        result = pattern.replace_all(&result, *replacement).into_owned();
    }
    result.trim().to_owned()
}

/// Derive the base anchor id for heading text.
///
/// Lowercases, removes characters that are not ASCII word characters,
/// whitespace, or hyphens, then collapses whitespace runs to single dashes.
/// Existing hyphens are preserved verbatim (not collapsed), matching the
/// renderer's id assignment.
fn anchor_base(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
        } else if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            out.push(c);
            in_whitespace = false;
        }
        // Other characters are removed and do not break a whitespace run.
    }

    out
}

/// Apply the collision-suffix rule to a base id.
///
/// First occurrence uses the base id verbatim; the Nth textual repeat
/// (N >= 2) appends `-N`.
fn dedup_id(base: String, seen_ids: &mut HashMap<String, usize>) -> String {
    let count = seen_ids.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        base
    } else {
        format!("{base}-{count}")
    }
}

/// Estimate reading time in whole minutes.
///
/// Word count (whitespace-split) divided by 200 words per minute, rounded
/// up, minimum 1.
#[must_use]
pub fn reading_time(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    u32::try_from(words.div_ceil(WORDS_PER_MINUTE))
        .unwrap_or(u32::MAX)
        .max(1)
}
