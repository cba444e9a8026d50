//! Tool records and the write-once catalog they live in.
//!
//! This crate provides:
//! - The [`Tool`] record as decoded from the dataset boundary.
//! - The [`Catalog`], an ordered, read-only sequence of tools.
//! - The asynchronous [`load`] contract with its [`LoadError`].
//! - Catalog diagnostics (duplicate and empty names).
//!
//! # Examples
//!
//! ```
//! use biocat_catalog::Catalog;
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"nome": "Kraken2", "ano_versao_relevante": 2019,
//!          "descricao": "Classificador", "categorias": ["Shotgun"],
//!          "link": "https://ccb.jhu.edu/software/kraken2/"}]"#,
//! )
//! .unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.tools()[0].name, "Kraken2");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Catalog loading from bundled, file and HTTP sources.
pub mod loader;
/// Tool records, the catalog and its diagnostics.
pub mod types;

pub use loader::{load, CatalogSource, LoadError, BUNDLED_DATASET, LOAD_ERROR_MESSAGE};
pub use types::{Catalog, CatalogDiagnostics, DuplicateName, Tool, YearLabel};
