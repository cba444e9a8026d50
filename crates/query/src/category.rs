//! Category filter syntax and category listing.

use std::collections::HashMap;
use std::sync::LazyLock;

use biocat_catalog::{Catalog, Tool};
use regex::Regex;
use serde::Serialize;

// Greedy capture: the category runs up to the *last* quote, so names
// containing `"` survive. `categoria:"a"b"` therefore yields `a"b`.
static CATEGORY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)^categoria:"(.+)"$"#).expect("valid regex"));

/// Extracts the category from a `categoria:"<name>"` query.
///
/// The prefix is matched case-insensitively and the raw string is used as
/// given (no trimming).
///
/// ```
/// use biocat_query::parse_category_query;
///
/// assert_eq!(parse_category_query(r#"Categoria:"Amplicon""#), Some("Amplicon"));
/// assert_eq!(parse_category_query("amplicon"), None);
/// assert_eq!(parse_category_query(r#"categoria:"""#), None);
/// ```
pub fn parse_category_query(raw: &str) -> Option<&str> {
    CATEGORY_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Builds the query a category tag click produces.
pub fn category_query(category: &str) -> String {
    format!("categoria:\"{category}\"")
}

/// Tools carrying `category` (case-insensitive, exact), in catalog order.
pub fn filter_by_category<'a>(catalog: &'a Catalog, category: &str) -> Vec<&'a Tool> {
    let wanted = category.to_lowercase();
    catalog
        .tools()
        .iter()
        .filter(|tool| tool.categories.iter().any(|c| c.to_lowercase() == wanted))
        .collect()
}

/// A category and the number of tools that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Spelling of the first occurrence in the catalog.
    pub name: String,
    /// Number of tools tagged with it.
    pub tools: usize,
}

/// Distinct categories, grouped case-insensitively, sorted by name.
pub fn list_categories(catalog: &Catalog) -> Vec<CategoryCount> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for tool in catalog.tools() {
        let mut seen_in_tool: Vec<String> = Vec::new();
        for category in &tool.categories {
            let key = category.to_lowercase();
            if seen_in_tool.contains(&key) {
                continue;
            }
            match index.get(&key) {
                Some(&i) => counts[i].tools += 1,
                None => {
                    index.insert(key.clone(), counts.len());
                    counts.push(CategoryCount {
                        name: category.clone(),
                        tools: 1,
                    });
                }
            }
            seen_in_tool.push(key);
        }
    }

    counts.sort_by_key(|c| c.name.to_lowercase());
    counts
}
