use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Quiet period before a search-as-you-type query runs.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns the path to the settings file (`BIOCAT_CONFIG` or `~/.biocat/config.toml`).
pub fn config_file() -> Option<PathBuf> {
    if let Ok(custom) = std::env::var("BIOCAT_CONFIG") {
        return Some(PathBuf::from(custom));
    }
    home_dir().ok().map(|h| h.join(".biocat/config.toml"))
}

/// Returns the path of the preference store (`BIOCAT_PREFERENCES` or `~/.biocat/preferences.json`).
pub fn preferences_path() -> Option<PathBuf> {
    if let Ok(custom) = std::env::var("BIOCAT_PREFERENCES") {
        return Some(PathBuf::from(custom));
    }
    home_dir().ok().map(|h| h.join(".biocat/preferences.json"))
}

/// Settings parsed from `config.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Catalog source: `bundled`, a file path, or an http(s) URL.
    #[serde(default)]
    pub data: Option<String>,
    /// Search-as-you-type quiet period in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,
}

/// Loads settings from disk if available.
pub fn load_settings() -> Result<Settings> {
    let Some(path) = config_file() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&text)?;
    tracing::debug!(path = %path.display(), ?settings, "loaded settings");
    Ok(settings)
}

/// Resolves the catalog source string: CLI flag, then `BIOCAT_DATA`, then settings.
///
/// `None` means the bundled dataset.
pub fn resolve_data_source(cli_override: Option<String>, settings: &Settings) -> Option<String> {
    cli_override
        .or_else(|| {
            std::env::var("BIOCAT_DATA")
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .or_else(|| settings.data.clone())
}

/// Computes the debounce delay using env var or settings.
pub fn debounce_delay(settings: &dyn Fn() -> Result<Settings>) -> Duration {
    let env_ms = std::env::var("BIOCAT_DEBOUNCE_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok());
    let settings_ms = settings().ok().and_then(|s| s.debounce_ms);
    Duration::from_millis(env_ms.or(settings_ms).unwrap_or(DEFAULT_DEBOUNCE_MS))
}
