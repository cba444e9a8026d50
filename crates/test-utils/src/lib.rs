//! Shared test utilities for biocat crates.
//!
//! Fixtures here deal in raw JSON and paths only, so every crate in the
//! workspace can depend on this one without pulling in the others.

use std::path::PathBuf;
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = biocat_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// JSON for a single tool record using the dataset field names.
pub fn tool_json(name: &str, categories: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "nome": name,
        "ano_versao_relevante": 2020,
        "descricao": format!("{name} description"),
        "categorias": categories,
        "link": format!("https://example.org/{}", name.to_lowercase().replace(' ', "-")),
    })
}

/// The two-tool catalog used by the end-to-end scenarios.
pub fn sample_catalog_json() -> String {
    serde_json::Value::Array(vec![
        tool_json("QIIME 2", &["Amplicon"]),
        tool_json("Kraken2", &["Shotgun"]),
    ])
    .to_string()
}

/// Standard test fixture with a temporary home directory.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to `$HOME/.biocat` in the temp environment
    pub biocat_dir: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with `$HOME/.biocat/` created.
    ///
    /// Does NOT set HOME env var - use `home_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let biocat_dir = tempdir.path().join(".biocat");
        std::fs::create_dir_all(&biocat_dir)?;
        Ok(Self {
            tempdir,
            biocat_dir,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &std::path::Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(self.home_path().to_str().unwrap()))
    }

    /// Write a dataset file at the fixture root and return its path.
    pub fn write_catalog(&self, file_name: &str, json: &str) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(file_name);
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Write `$HOME/.biocat/config.toml` and return its path.
    pub fn write_config(&self, toml: &str) -> std::io::Result<PathBuf> {
        let path = self.biocat_dir.join("config.toml");
        std::fs::write(&path, toml)?;
        Ok(path)
    }
}
