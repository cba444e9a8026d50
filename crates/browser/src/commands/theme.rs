use anyhow::Result;
use biocat_state::{JsonFilePreferences, PreferenceStore, Theme, DARK_MODE_KEY};

use super::emit;
use crate::cli::OutputFormat;

fn theme_name(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "dark"
    } else {
        "light"
    }
}

pub(crate) fn theme_output(
    store: &mut dyn PreferenceStore,
    toggle: bool,
    format: OutputFormat,
) -> Result<String> {
    let theme = if toggle {
        Theme::toggle(store)?
    } else {
        Theme::load(store)
    };
    if format.is_json() {
        let body = serde_json::json!({
            "theme": theme_name(theme),
            DARK_MODE_KEY: theme.stored_value(),
            "icon": theme.toggle_icon(),
        });
        return Ok(serde_json::to_string_pretty(&body)?);
    }
    Ok(format!(
        "Theme: {} (toggle: {})",
        theme_name(theme),
        theme.toggle_icon()
    ))
}

/// Handle the `theme` command.
pub(crate) fn handle_theme_command(toggle: bool, format: OutputFormat) -> Result<()> {
    let mut store = JsonFilePreferences::open_default()?;
    tracing::debug!(path = %store.path().display(), toggle, "theme preference");
    emit(&theme_output(&mut store, toggle, format)?);
    Ok(())
}
