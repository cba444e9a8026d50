//! Occurrence spans for highlighting a query inside a tool name.
//!
//! The query is escaped before compilation, so `c++` or `(` in user input
//! are matched literally.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// Half-open byte range `[start, end)` into the highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// First byte of the occurrence.
    pub start: usize,
    /// One past the last byte of the occurrence.
    pub end: usize,
}

impl Span {
    /// Creates a span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Case-insensitive literal matcher for one query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Regex,
}

impl Highlighter {
    /// Compiles `query` as an escaped, case-insensitive literal.
    ///
    /// Returns `None` for an empty query (which would match everywhere) or
    /// when the escaped pattern exceeds the regex size limit.
    pub fn new(query: &str) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self { pattern }),
            Err(err) => {
                tracing::warn!(error = %err, "query could not be compiled into a matcher");
                None
            }
        }
    }

    /// Every non-overlapping occurrence in `text`, left to right.
    pub fn spans(&self, text: &str) -> Vec<Span> {
        self.pattern
            .find_iter(text)
            .map(|m| Span::new(m.start(), m.end()))
            .collect()
    }

    /// True if the query occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Wraps each span of `text` in `open`/`close` markers.
///
/// Spans that are out of order, overlapping, or not on character
/// boundaries are skipped.
///
/// ```
/// use biocat_query::{render_highlights, Span};
///
/// let out = render_highlights("Kraken2", &[Span::new(0, 3)], "<mark>", "</mark>");
/// assert_eq!(out, "<mark>Kra</mark>ken2");
/// ```
pub fn render_highlights(text: &str, spans: &[Span], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut cursor = 0;
    for span in spans {
        if span.start < cursor || span.end <= span.start {
            continue;
        }
        let (Some(before), Some(marked)) = (
            text.get(cursor..span.start),
            text.get(span.start..span.end),
        ) else {
            continue;
        };
        out.push_str(before);
        out.push_str(open);
        out.push_str(marked);
        out.push_str(close);
        cursor = span.end;
    }
    out.push_str(text.get(cursor..).unwrap_or_default());
    out
}
