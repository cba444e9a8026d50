use anyhow::Result;
use biocat_query::list_categories;

use super::{emit, load_error_output, Output};
use crate::render::render_categories;
use crate::session::BrowserSession;

pub(crate) fn categories_output(session: &BrowserSession, out: Output) -> Result<String> {
    if let Some(notice) = load_error_output(session, out.format)? {
        return Ok(notice);
    }
    let categories = list_categories(session.catalog());
    if out.format.is_json() {
        return Ok(serde_json::to_string_pretty(&categories)?);
    }
    Ok(render_categories(&categories))
}

/// Handle the `categories` command.
pub(crate) fn handle_categories_command(session: &BrowserSession, out: Output) -> Result<()> {
    emit(&categories_output(session, out)?);
    Ok(())
}
