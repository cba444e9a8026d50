//! Manages configuration and persisted preferences.
//!
//! This crate provides utilities for:
//! - Reading environment variables and the optional `config.toml` settings file.
//! - Storing the single UI preference (`darkMode`) behind a key-value trait.

pub mod env;
pub mod preferences;

pub use env::{
    config_file, resolve_data_source, debounce_delay, home_dir, load_settings, preferences_path,
    Settings, DEFAULT_DEBOUNCE_MS,
};
pub use preferences::{
    JsonFilePreferences, MemoryPreferences, PreferenceStore, Theme, DARK_MODE_KEY,
};
