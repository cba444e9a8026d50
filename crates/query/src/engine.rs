//! Search dispatch, name search, category search, and name-set lookup.

use std::collections::HashSet;

use biocat_catalog::{Catalog, Tool};
use serde::Serialize;

use crate::category::{filter_by_category, parse_category_query};
use crate::highlight::{Highlighter, Span};

/// A matched tool plus the spans to highlight in its name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolMatch<'a> {
    /// The matched tool, borrowed from the catalog.
    pub tool: &'a Tool,
    /// Occurrences of the query in the name; empty for category results.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<Span>,
}

/// Outcome of a search.
///
/// `EmptyQuery` tells the renderer to clear results, whereas an empty
/// `Matches` means "nothing found".
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "matches", rename_all = "snake_case")]
pub enum MatchResult<'a> {
    /// The query was empty or whitespace.
    EmptyQuery,
    /// Matching tools in catalog order (possibly none).
    Matches(Vec<ToolMatch<'a>>),
}

impl<'a> MatchResult<'a> {
    /// True for the empty-query outcome.
    pub fn is_empty_query(&self) -> bool {
        matches!(self, MatchResult::EmptyQuery)
    }

    /// True when a real query found nothing.
    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchResult::Matches(m) if m.is_empty())
    }

    /// Matched tools; empty for `EmptyQuery`.
    pub fn matches(&self) -> &[ToolMatch<'a>] {
        match self {
            MatchResult::EmptyQuery => &[],
            MatchResult::Matches(m) => m,
        }
    }

    /// Names of matched tools in order.
    pub fn names(&self) -> Vec<&'a str> {
        self.matches().iter().map(|m| m.tool.name.as_str()).collect()
    }
}

/// Case-insensitive substring search over tool names.
///
/// The query is used as given; trimming only decides emptiness.
pub fn search_by_name<'a>(catalog: &'a Catalog, raw_query: &str) -> MatchResult<'a> {
    if raw_query.trim().is_empty() {
        return MatchResult::EmptyQuery;
    }
    let Some(highlighter) = Highlighter::new(raw_query) else {
        return MatchResult::Matches(Vec::new());
    };

    let matches: Vec<ToolMatch<'a>> = catalog
        .tools()
        .iter()
        .filter_map(|tool| {
            let highlights = highlighter.spans(&tool.name);
            (!highlights.is_empty()).then_some(ToolMatch { tool, highlights })
        })
        .collect();

    tracing::debug!(query = raw_query, found = matches.len(), "name search");
    MatchResult::Matches(matches)
}

/// Category search for queries of the form `categoria:"<name>"`.
///
/// Returns `None` when the query does not have that form, so the caller
/// can fall back to [`search_by_name`].
pub fn search_by_category<'a>(catalog: &'a Catalog, raw_query: &str) -> Option<MatchResult<'a>> {
    let category = parse_category_query(raw_query)?;
    let matches: Vec<ToolMatch<'a>> = filter_by_category(catalog, category)
        .into_iter()
        .map(|tool| ToolMatch {
            tool,
            highlights: Vec::new(),
        })
        .collect();

    tracing::debug!(category, found = matches.len(), "category search");
    Some(MatchResult::Matches(matches))
}

/// Dispatches a raw search-box value to category or name search.
///
/// ```
/// use biocat_catalog::Catalog;
/// use biocat_query::search;
///
/// let catalog = Catalog::empty();
/// assert!(search(&catalog, "   ").is_empty_query());
/// assert!(search(&catalog, "kraken").is_no_match());
/// ```
pub fn search<'a>(catalog: &'a Catalog, raw_query: &str) -> MatchResult<'a> {
    if raw_query.trim().is_empty() {
        return MatchResult::EmptyQuery;
    }
    search_by_category(catalog, raw_query).unwrap_or_else(|| search_by_name(catalog, raw_query))
}

/// Tools whose name equals one of `names` (case-insensitive), in catalog order.
///
/// Input order and duplicates do not matter; unknown names are skipped.
pub fn lookup_by_names<'a, S: AsRef<str>>(catalog: &'a Catalog, names: &[S]) -> Vec<&'a Tool> {
    let wanted: HashSet<String> = names.iter().map(|n| n.as_ref().to_lowercase()).collect();
    catalog
        .tools()
        .iter()
        .filter(|tool| wanted.contains(&tool.name.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use biocat_catalog::YearLabel;

    fn tool(name: &str, categories: &[&str]) -> Tool {
        Tool {
            name: name.into(),
            relevant_year: YearLabel::Text("2024".into()),
            description: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            link: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::from(vec![
            tool("FastQC", &["Controle de Qualidade"]),
            tool("Fastp", &["Controle de Qualidade", "Pré-processamento"]),
            tool("QIIME 2", &["Amplicon", "Metagenômica"]),
            tool("Kraken2", &["Shotgun", "Metagenômica"]),
            tool("Anvi'o", &["Shotgun"]),
        ])
    }

    #[test]
    fn empty_and_whitespace_queries_are_distinguished_from_no_match() {
        let c = catalog();
        assert!(search_by_name(&c, "").is_empty_query());
        assert!(search_by_name(&c, " \t ").is_empty_query());
        assert!(!search_by_name(&c, "zzz").is_empty_query());
        assert!(search_by_name(&c, "zzz").is_no_match());
    }

    #[test]
    fn name_search_preserves_catalog_order() {
        let c = catalog();
        assert_eq!(search_by_name(&c, "fast").names(), vec!["FastQC", "Fastp"]);
    }

    #[test]
    fn name_search_uses_untrimmed_query() {
        let c = catalog();
        assert!(search_by_name(&c, "fast ").is_no_match());
        assert_eq!(search_by_name(&c, "QIIME 2").names(), vec!["QIIME 2"]);
    }

    #[test]
    fn name_search_highlights_every_occurrence() {
        let c = Catalog::from(vec![tool("Abcabc", &[])]);
        let result = search_by_name(&c, "abc");
        assert_eq!(
            result.matches()[0].highlights,
            vec![Span::new(0, 3), Span::new(3, 6)]
        );
    }

    #[test]
    fn apostrophes_and_metacharacters_match_literally() {
        let c = catalog();
        assert_eq!(search_by_name(&c, "anvi'o").names(), vec!["Anvi'o"]);
        assert!(search_by_name(&c, "[").is_no_match());
        assert!(search_by_name(&c, "fast.*").is_no_match());
    }

    #[test]
    fn category_search_returns_none_without_pattern() {
        assert!(search_by_category(&catalog(), "Amplicon").is_none());
    }

    #[test]
    fn category_search_has_no_highlights() {
        let c = catalog();
        let result = search_by_category(&c, r#"categoria:"metagenômica""#).unwrap();
        assert_eq!(result.names(), vec!["QIIME 2", "Kraken2"]);
        assert!(result.matches().iter().all(|m| m.highlights.is_empty()));
    }

    #[test]
    fn category_search_with_unknown_category_is_empty() {
        let c = catalog();
        let result = search_by_category(&c, r#"categoria:"Proteômica""#).unwrap();
        assert!(result.is_no_match());
    }

    #[test]
    fn dispatch_prefers_category_pattern() {
        let c = catalog();
        assert_eq!(
            search(&c, r#"CATEGORIA:"shotgun""#).names(),
            vec!["Kraken2", "Anvi'o"]
        );
        // Leading whitespace defeats the anchored pattern, so this is a name search.
        assert!(search(&c, r#" categoria:"Shotgun""#).is_no_match());
    }

    #[test]
    fn lookup_returns_catalog_order_and_skips_unknown() {
        let c = catalog();
        let found = lookup_by_names(&c, &["kraken2", "Unknown", "FASTQC"]);
        let names: Vec<_> = found.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["FastQC", "Kraken2"]);
    }

    #[test]
    fn lookup_is_idempotent_and_order_stable() {
        let c = catalog();
        let first = lookup_by_names(&c, &["Anvi'o", "Fastp", "QIIME 2"]);
        let reversed = lookup_by_names(&c, &["QIIME 2", "Fastp", "Anvi'o"]);
        assert_eq!(first, reversed);

        let again: Vec<&str> = first.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(lookup_by_names(&c, &again), first);
    }

    #[test]
    fn lookup_requires_exact_names() {
        let c = catalog();
        assert!(lookup_by_names(&c, &["Fast"]).is_empty());
        assert!(lookup_by_names::<&str>(&c, &[]).is_empty());
    }

    #[test]
    fn match_result_serializes_with_status_tag() {
        let c = catalog();
        let empty = serde_json::to_value(search(&c, "")).unwrap();
        assert_eq!(empty["status"], "empty_query");

        let found = serde_json::to_value(search(&c, "kra")).unwrap();
        assert_eq!(found["status"], "matches");
        assert_eq!(found["matches"][0]["tool"]["nome"], "Kraken2");
        assert_eq!(found["matches"][0]["highlights"][0]["end"], 3);
    }
}
