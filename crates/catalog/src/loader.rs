use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Catalog;

/// Dataset compiled into the binary.
pub const BUNDLED_DATASET: &str = include_str!("../data/tools.json");

/// User-facing message shown when the catalog cannot be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Could not load the tool catalog. Try again later.";

const USER_AGENT: &str = concat!("biocat/", env!("CARGO_PKG_VERSION"));

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The dataset shipped with the binary.
    #[default]
    Bundled,
    /// A JSON file on disk.
    File(PathBuf),
    /// A JSON document served over HTTP(S).
    Url(String),
}

impl CatalogSource {
    /// Interprets a user-supplied source string.
    ///
    /// ```
    /// use biocat_catalog::CatalogSource;
    ///
    /// assert_eq!(CatalogSource::parse("bundled"), CatalogSource::Bundled);
    /// assert!(matches!(CatalogSource::parse("https://x/data.json"), CatalogSource::Url(_)));
    /// assert!(matches!(CatalogSource::parse("data.json"), CatalogSource::File(_)));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower == "bundled" {
            CatalogSource::Bundled
        } else if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Url(trimmed.to_string())
        } else {
            CatalogSource::File(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Bundled => f.write_str("bundled"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

/// Failure to produce a catalog. The consumer falls back to an empty catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset file could not be read.
    #[error("failed to read catalog file {}: {source}", .path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP request did not complete.
    #[error("failed to fetch catalog: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("catalog request to {url} failed with HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Status code returned.
        status: u16,
    },
    /// The payload is not a JSON array of tool records.
    #[error("catalog payload is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Loads the full catalog from `source`, in source order.
///
/// Called once per process; failures are not retried.
pub async fn load(source: &CatalogSource) -> Result<Catalog, LoadError> {
    tracing::debug!(%source, "loading catalog");
    let raw = match source {
        CatalogSource::Bundled => BUNDLED_DATASET.to_string(),
        CatalogSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
        }
        CatalogSource::Url(url) => fetch(url).await?,
    };
    let catalog = Catalog::from_json(&raw)?;
    tracing::info!(%source, tools = catalog.len(), "catalog loaded");
    Ok(catalog)
}

async fn fetch(url: &str) -> Result<String, LoadError> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .header("User-Agent", USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(response.text().await?)
}


/// HTTP loader tests backed by wiremock.
#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn load_url_success_preserves_order() {
        let server = MockServer::start().await;
        let body = json!([
            {"nome": "QIIME 2", "ano_versao_relevante": 2019, "descricao": "d",
             "categorias": ["Amplicon"], "link": "https://qiime2.org"},
            {"nome": "Kraken2", "ano_versao_relevante": "2019", "descricao": "d",
             "categorias": ["Shotgun"], "link": "https://ccb.jhu.edu"}
        ]);
        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let source = CatalogSource::Url(format!("{}/data.json", server.uri()));
        let catalog = load(&source).await.unwrap();
        let names: Vec<_> = catalog.tools().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["QIIME 2", "Kraken2"]);
    }

    #[tokio::test]
    async fn load_url_non_success_is_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = CatalogSource::Url(format!("{}/data.json", server.uri()));
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn load_url_malformed_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}"))
            .mount(&server)
            .await;

        let source = CatalogSource::Url(format!("{}/data.json", server.uri()));
        let err = load(&source).await.unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }
}
