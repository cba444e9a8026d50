//! Key-value preference storage and the light/dark theme flag.

use crate::env::preferences_path;
use anyhow::Result;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Key holding the theme choice.
pub const DARK_MODE_KEY: &str = "darkMode";

const ENABLED: &str = "enabled";
const DISABLED: &str = "disabled";

/// Durable string key-value storage.
pub trait PreferenceStore {
    /// Returns the stored value for `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used in tests and when no home directory is available.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFilePreferences {
    /// Opens the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    /// Opens the store at the configured location.
    pub fn open_default() -> Result<Self> {
        let path = preferences_path()
            .ok_or_else(|| anyhow::anyhow!("no location for the preference store"))?;
        Self::open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads the theme; anything but `"enabled"` is light.
    pub fn load(store: &dyn PreferenceStore) -> Theme {
        match store.get(DARK_MODE_KEY).as_deref() {
            Some(ENABLED) => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Flips the stored theme and returns the new one.
    pub fn toggle(store: &mut dyn PreferenceStore) -> Result<Theme> {
        let next = match Theme::load(store) {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        store.set(DARK_MODE_KEY, next.stored_value())?;
        tracing::debug!(theme = ?next, "theme toggled");
        Ok(next)
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Value persisted under [`DARK_MODE_KEY`].
    pub fn stored_value(self) -> &'static str {
        match self {
            Theme::Dark => ENABLED,
            Theme::Light => DISABLED,
        }
    }

    /// Icon for the toggle control: the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_light() {
        let store = MemoryPreferences::new();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn unexpected_value_is_light() {
        let mut store = MemoryPreferences::new();
        store.set(DARK_MODE_KEY, "yes").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = MemoryPreferences::new();
        assert_eq!(Theme::toggle(&mut store).unwrap(), Theme::Dark);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("enabled"));
        assert_eq!(Theme::toggle(&mut store).unwrap(), Theme::Light);
        assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("disabled"));
    }

    #[test]
    fn icon_shows_the_other_theme() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
    }

    #[test]
    fn json_store_writes_parent_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/prefs.json");
        let mut store = JsonFilePreferences::open(&path).unwrap();
        assert!(store.get(DARK_MODE_KEY).is_none());

        store.set(DARK_MODE_KEY, "enabled").unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("darkMode").map(String::as_str), Some("enabled"));
    }

    #[test]
    fn corrupt_json_store_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(JsonFilePreferences::open(&path).is_err());
    }
}
