//! CLI command handlers for the biocat application.

mod categories;
mod doctor;
mod live;
mod recommend;
mod search;
mod theme;
mod wizard;

use anyhow::Result;
use biocat_catalog::LOAD_ERROR_MESSAGE;

use crate::cli::OutputFormat;
use crate::render::Markers;
use crate::session::BrowserSession;

pub(crate) use categories::handle_categories_command;
pub(crate) use doctor::handle_doctor_command;
pub(crate) use live::handle_live_command;
pub(crate) use recommend::{handle_goals_command, handle_recommend_command};
pub(crate) use search::{
    handle_category_command, handle_list_command, handle_search_command, handle_show_command,
};
pub(crate) use theme::handle_theme_command;
pub(crate) use wizard::handle_wizard_command;

/// How results are written.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Output {
    pub format: OutputFormat,
    pub markers: Markers,
}

/// Prints `text` unless it is empty.
pub(crate) fn emit(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

/// The static load failure notice, if the session has no catalog.
pub(crate) fn load_error_output(
    session: &BrowserSession,
    format: OutputFormat,
) -> Result<Option<String>> {
    if session.load_error().is_none() {
        return Ok(None);
    }
    if format.is_json() {
        let body = serde_json::json!({ "error": LOAD_ERROR_MESSAGE });
        Ok(Some(serde_json::to_string_pretty(&body)?))
    } else {
        Ok(Some(LOAD_ERROR_MESSAGE.to_string()))
    }
}
