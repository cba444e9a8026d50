//! Diagnostics for the catalog source, the dataset and local configuration.
//!
//! Checks that the catalog loads, that tool names are unique and non-empty,
//! and that every tool named by a workflow suggestion exists in the catalog.

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use biocat_catalog::LOAD_ERROR_MESSAGE;
use biocat_recommend::all_recommendations;
use biocat_state::{config_file, preferences_path};

use crate::session::BrowserSession;

/// Recommended tool names with no catalog entry, as `(pair, tool)`.
pub(crate) fn missing_recommended_tools(session: &BrowserSession) -> Vec<(String, &'static str)> {
    let mut missing = Vec::new();
    for rec in all_recommendations() {
        for tool in rec.tools {
            if session.catalog().find(tool).is_none() {
                missing.push((format!("{}/{}", rec.data_type.key(), rec.goal), *tool));
            }
        }
    }
    missing
}

fn describe_path(label: &str, path: Option<&Path>, lines: &mut Vec<String>) {
    match path {
        Some(p) if p.exists() => lines.push(format!("{label}: {}", p.display())),
        Some(p) => lines.push(format!("{label}: {} (not present)", p.display())),
        None => lines.push(format!("{label}: no home directory")),
    }
}

pub(crate) fn doctor_report(session: &BrowserSession, debounce: Duration) -> Vec<String> {
    let mut lines = vec![format!("catalog source: {}", session.source())];

    if let Some(err) = session.load_error() {
        lines.push(format!("  ! load failed: {err}"));
        lines.push(format!("  i users see: {LOAD_ERROR_MESSAGE}"));
    } else {
        let catalog = session.catalog();
        lines.push(format!("catalog: {} tools", catalog.len()));

        let diag = catalog.diagnostics();
        for dup in &diag.duplicates {
            lines.push(format!(
                "  ! duplicate name '{}' at #{} and #{}",
                dup.name, dup.first_index, dup.duplicate_index
            ));
        }
        for index in &diag.empty_names {
            lines.push(format!("  ! tool #{index} has an empty name"));
        }

        let missing = missing_recommended_tools(session);
        if missing.is_empty() {
            lines.push(format!(
                "workflows: {} suggestions, every tool present in the catalog",
                all_recommendations().len()
            ));
        } else {
            for (pair, tool) in &missing {
                lines.push(format!("  ! {pair} suggests '{tool}', which is not in the catalog"));
            }
        }
    }

    describe_path("settings", config_file().as_deref(), &mut lines);
    describe_path("preferences", preferences_path().as_deref(), &mut lines);
    lines.push(format!("debounce: {} ms", debounce.as_millis()));
    lines
}

/// Handle the `doctor` command.
pub(crate) fn handle_doctor_command(session: &BrowserSession, debounce: Duration) -> Result<()> {
    let lines = doctor_report(session, debounce);
    println!("{}", lines.join("\n"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{failed_session, sample_session};
    use biocat_catalog::{Catalog, CatalogSource};

    #[test]
    fn bundled_catalog_covers_every_workflow_tool() {
        let session = BrowserSession::from_load(
            CatalogSource::Bundled,
            Catalog::from_json(biocat_catalog::BUNDLED_DATASET).map_err(Into::into),
        );
        assert!(missing_recommended_tools(&session).is_empty());
        assert!(session.catalog().diagnostics().is_clean());
    }

    #[test]
    fn small_catalog_reports_missing_tools() {
        let session = sample_session();
        let missing = missing_recommended_tools(&session);
        assert!(missing
            .iter()
            .any(|(pair, tool)| pair == "variants/calling" && *tool == "BWA"));
        assert!(!missing.iter().any(|(_, tool)| *tool == "QIIME 2"));

        let report = doctor_report(&session, Duration::from_millis(300)).join("\n");
        assert!(report.contains("catalog: 2 tools"));
        assert!(report.contains("debounce: 300 ms"));
    }

    #[test]
    fn load_failure_is_reported() {
        let report = doctor_report(&failed_session(), Duration::from_millis(300)).join("\n");
        assert!(report.contains("catalog source: https://example.org/data.json"));
        assert!(report.contains(
            "! load failed: catalog request to https://example.org/data.json failed with HTTP 500"
        ));
    }

    #[test]
    fn duplicate_names_are_flagged() {
        let json = serde_json::json!([
            biocat_test_utils::tool_json("STAR", &["RNA-seq"]),
            biocat_test_utils::tool_json("star", &["RNA-seq"]),
        ])
        .to_string();
        let session = BrowserSession::from_catalog(Catalog::from_json(&json).unwrap());
        let report = doctor_report(&session, Duration::from_millis(300)).join("\n");
        assert!(report.contains("duplicate name 'star' at #0 and #1"));
    }
}
