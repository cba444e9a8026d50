//! Mutable UI state for one browsing session.
//!
//! The session owns the write-once catalog (or the error that replaced it),
//! the current query text, and the wizard. Every trigger the user can fire
//! (typing, clicking a category tag, following a guide link, pressing
//! "show tools") is a method here.

use biocat_catalog::{load, Catalog, CatalogSource, LoadError, Tool};
use biocat_query::{category_query, lookup_by_names, search, MatchResult};
use biocat_recommend::Wizard;

#[derive(Debug)]
pub struct BrowserSession {
    source: CatalogSource,
    catalog: Catalog,
    load_error: Option<LoadError>,
    query: String,
    wizard: Wizard,
}

impl BrowserSession {
    /// Loads the catalog once; a failure leaves the session with an empty catalog.
    pub async fn load(source: CatalogSource) -> Self {
        let result = load(&source).await;
        Self::from_load(source, result)
    }

    pub fn from_load(source: CatalogSource, result: Result<Catalog, LoadError>) -> Self {
        let (catalog, load_error) = match result {
            Ok(catalog) => (catalog, None),
            Err(err) => {
                tracing::warn!(%source, error = %err, "catalog unavailable; continuing empty");
                (Catalog::empty(), Some(err))
            }
        };
        Self {
            source,
            catalog,
            load_error,
            query: String::new(),
            wizard: Wizard::new(),
        }
    }

    /// A session over an already loaded catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::from_load(CatalogSource::Bundled, Ok(catalog))
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }

    /// Current search box contents.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query (an input-changed event).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Results for the current query.
    pub fn results(&self) -> MatchResult<'_> {
        search(&self.catalog, &self.query)
    }

    /// Sets the query to `term` and runs it (guide link).
    pub fn search_and_show(&mut self, term: &str) -> MatchResult<'_> {
        self.set_query(term);
        self.results()
    }

    /// Sets the query to the category filter for `category` and runs it (tag click).
    pub fn search_by_category_tag(&mut self, category: &str) -> MatchResult<'_> {
        self.set_query(category_query(category));
        self.results()
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    /// Clears the query and returns the catalog entries of the wizard's suggested tools.
    pub fn show_suggested_tools(&mut self) -> Vec<&Tool> {
        self.query.clear();
        lookup_by_names(&self.catalog, self.wizard.suggested_tools())
    }
}
