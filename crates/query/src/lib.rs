//! Query engine over a loaded catalog.
//!
//! This crate provides:
//! - Case-insensitive name search with highlight spans for every occurrence
//! - `categoria:"..."` category filtering
//! - Exact name-set lookup used by the recommendation flow
//!
//! Every function is pure and total: malformed input degrades to an empty
//! result, never an error.

pub mod category;
pub mod engine;
pub mod highlight;

pub use category::{
    category_query, filter_by_category, list_categories, parse_category_query, CategoryCount,
};
pub use engine::{
    lookup_by_names, search, search_by_category, search_by_name, MatchResult, ToolMatch,
};
pub use highlight::{render_highlights, Highlighter, Span};
