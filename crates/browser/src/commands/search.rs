//! Handlers for `search`, `category`, `show` and `list`.

use anyhow::Result;
use biocat_catalog::Tool;
use biocat_query::MatchResult;

use super::{emit, load_error_output, Output};
use crate::render::{render_results, render_tools};
use crate::session::BrowserSession;

fn match_output(result: &MatchResult<'_>, out: Output) -> Result<String> {
    if out.format.is_json() {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    Ok(render_results(result, out.markers))
}

pub(crate) fn search_output(
    session: &mut BrowserSession,
    query: &str,
    out: Output,
) -> Result<String> {
    if let Some(notice) = load_error_output(session, out.format)? {
        return Ok(notice);
    }
    session.set_query(query);
    match_output(&session.results(), out)
}

pub(crate) fn category_output(
    session: &mut BrowserSession,
    category: &str,
    out: Output,
) -> Result<String> {
    if let Some(notice) = load_error_output(session, out.format)? {
        return Ok(notice);
    }
    let result = session.search_by_category_tag(category);
    match_output(&result, out)
}

pub(crate) fn show_output(session: &mut BrowserSession, name: &str, out: Output) -> Result<String> {
    if let Some(notice) = load_error_output(session, out.format)? {
        return Ok(notice);
    }
    let result = session.search_and_show(name);
    match_output(&result, out)
}

pub(crate) fn list_output(session: &BrowserSession, out: Output) -> Result<String> {
    if let Some(notice) = load_error_output(session, out.format)? {
        return Ok(notice);
    }
    if out.format.is_json() {
        return Ok(serde_json::to_string_pretty(session.catalog())?);
    }
    let tools: Vec<&Tool> = session.catalog().tools().iter().collect();
    Ok(render_tools(&tools, out.markers))
}

/// Handle the `search` command.
pub(crate) fn handle_search_command(
    session: &mut BrowserSession,
    query: &str,
    out: Output,
) -> Result<()> {
    emit(&search_output(session, query, out)?);
    Ok(())
}

/// Handle the `category` command.
pub(crate) fn handle_category_command(
    session: &mut BrowserSession,
    category: &str,
    out: Output,
) -> Result<()> {
    emit(&category_output(session, category, out)?);
    Ok(())
}

/// Handle the `show` command.
pub(crate) fn handle_show_command(
    session: &mut BrowserSession,
    name: &str,
    out: Output,
) -> Result<()> {
    emit(&show_output(session, name, out)?);
    Ok(())
}

/// Handle the `list` command.
pub(crate) fn handle_list_command(session: &BrowserSession, out: Output) -> Result<()> {
    emit(&list_output(session, out)?);
    Ok(())
}
