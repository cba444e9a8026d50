//! CLI integration tests for `biocat` against a dataset file.
//!
//! Each run gets its own HOME so settings and preferences stay isolated.

use std::process::{Command, Output};

use anyhow::{Context, Result};
use biocat_test_utils::sample_catalog_json;

fn biocat(home: &std::path::Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_biocat"))
        .env("HOME", home)
        .env_remove("BIOCAT_DATA")
        .env_remove("BIOCAT_CONFIG")
        .env_remove("BIOCAT_PREFERENCES")
        .args(args)
        .output()
        .context("failed to execute biocat")
}

#[test]
fn given_catalog_file_when_searching_json_then_match_has_highlight() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let data = tmp.path().join("data.json");
    std::fs::write(&data, sample_catalog_json())?;

    let output = biocat(
        tmp.path(),
        &["--data", data.to_str().unwrap(), "--format", "json", "search", "kra"],
    )?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "search should succeed\nSTDERR:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["status"], "matches");
    assert_eq!(value["matches"][0]["tool"]["nome"], "Kraken2");
    assert_eq!(value["matches"][0]["highlights"][0]["end"], 3);
    Ok(())
}

#[test]
fn given_settings_file_when_listing_then_configured_source_is_used() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let data = tmp.path().join("data.json");
    std::fs::write(&data, sample_catalog_json())?;
    std::fs::create_dir_all(tmp.path().join(".biocat"))?;
    std::fs::write(
        tmp.path().join(".biocat/config.toml"),
        format!("data = {:?}\n", data.to_str().unwrap()),
    )?;

    let output = biocat(tmp.path(), &["list"])?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("QIIME 2"));
    assert!(stdout.contains("Kraken2"));
    assert!(!stdout.contains("FastQC"));
    Ok(())
}

#[test]
fn given_missing_catalog_when_searching_then_static_message_and_success() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let missing = tmp.path().join("missing.json");

    let output = biocat(tmp.path(), &["--data", missing.to_str().unwrap(), "search", "kra"])?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Could not load the tool catalog. Try again later."
    );
    Ok(())
}

#[test]
fn given_piped_lines_when_live_then_only_last_query_runs() -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let tmp = tempfile::tempdir()?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_biocat"))
        .env("HOME", tmp.path())
        .env_remove("BIOCAT_DATA")
        .env_remove("BIOCAT_CONFIG")
        .args(["live", "--debounce-ms", "5000"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .context("failed to spawn biocat live")?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(b"fast\nfastq\n")?;

    let output = child.wait_with_output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.matches("--- ").count(), 1);
    assert!(stdout.contains("--- \"fastq\" ---"));
    assert!(stdout.contains("[FastQ]C"));
    Ok(())
}
