//! In-memory search index over the site catalog.
//!
//! Matching is plain case-insensitive substring containment against the
//! title, description and category label of each entry. Results always come
//! back in catalog order.

use super::catalog::Catalog;
use super::models::CatalogEntry;
use regex::Regex;
use std::ops::Range;
use tracing::warn;

pub const HIGHLIGHT_OPEN: &str = r#"<span class="search-highlight">"#;
pub const HIGHLIGHT_CLOSE: &str = "</span>";

/// Trimmed, lower-cased form of raw user input.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    title: String,
    description: String,
    category: String,
}

impl IndexedEntry {
    fn matches(&self, query: &str) -> bool {
        self.title.contains(query)
            || self.description.contains(query)
            || self.category.contains(query)
    }
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Catalog,
    index: Vec<IndexedEntry>,
}

impl SearchEngine {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let index = catalog
            .entries()
            .iter()
            .map(|entry| IndexedEntry {
                title: entry.title.to_lowercase(),
                description: entry.description.to_lowercase(),
                category: entry.category.label().to_lowercase(),
            })
            .collect();
        Self { catalog, index }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog indices of the entries matching `query`.
    #[must_use]
    pub fn matches(&self, query: &str) -> Vec<usize> {
        let query = normalize_query(query);
        if query.is_empty() {
            return Vec::new();
        }

        self.index
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.matches(&query))
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        self.matches(query)
            .into_iter()
            .filter_map(|i| self.catalog.get(i))
            .collect()
    }
}

/// Literal matcher for one query. Text is lower-cased the same way the
/// search index is, so every entry `SearchEngine` returns gets marked. An
/// empty query matches nothing.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    #[must_use]
    pub fn new(query: &str) -> Self {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Self { pattern: None };
        }

        let pattern = match Regex::new(&regex::escape(&query)) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(error = %e, "could not build highlight pattern; highlighting disabled");
                None
            }
        };
        Self { pattern }
    }

    /// Byte ranges of `text` covering every non-overlapping match, left to
    /// right. Ranges always fall on char boundaries of `text`.
    #[must_use]
    pub fn ranges(&self, text: &str) -> Vec<Range<usize>> {
        let Some(re) = &self.pattern else {
            return Vec::new();
        };

        // `str::to_lowercase` only differs from per-char lowering on final
        // sigma, and both sigma forms have the same UTF-8 length, so per-char
        // lengths give the offsets into `lowered`.
        let lowered = text.to_lowercase();
        // (offset in `lowered`, source char range)
        let mut chars: Vec<(usize, Range<usize>)> = Vec::with_capacity(text.len());
        let mut offset = 0;
        for (i, c) in text.char_indices() {
            chars.push((offset, i..i + c.len_utf8()));
            offset += c.to_lowercase().map(char::len_utf8).sum::<usize>();
        }
        let source = |offset: usize| {
            let idx = chars
                .partition_point(|(start, _)| *start <= offset)
                .saturating_sub(1);
            chars[idx].1.clone()
        };

        let mut ranges: Vec<Range<usize>> = Vec::new();
        for m in re.find_iter(&lowered) {
            if m.is_empty() {
                continue;
            }
            let mut start = source(m.start()).start;
            let end = source(m.end() - 1).end;
            // A char whose lower case spans several chars may be hit twice.
            if let Some(last) = ranges.last() {
                start = start.max(last.end);
            }
            if start < end {
                ranges.push(start..end);
            }
        }
        ranges
    }

    #[must_use]
    pub fn markup(&self, text: &str) -> String {
        let ranges = self.ranges(text);
        if ranges.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(
            text.len() + ranges.len() * (HIGHLIGHT_OPEN.len() + HIGHLIGHT_CLOSE.len()),
        );
        let mut last = 0;
        for range in ranges {
            out.push_str(&text[last..range.start]);
            out.push_str(HIGHLIGHT_OPEN);
            out.push_str(&text[range.clone()]);
            out.push_str(HIGHLIGHT_CLOSE);
            last = range.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    Highlighter::new(query).markup(text)
}

#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    Highlighter::new(query).ranges(text)
}
