//! Search as you type over stdin.
//!
//! Every input line replaces the query. Searches run through the debouncer,
//! so a burst of lines produces a single search for the last one.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::{load_error_output, Output};
use crate::debounce::run_debounced;
use crate::render::render_results;
use crate::session::BrowserSession;

fn write_results(
    session: &mut BrowserSession,
    query: String,
    out: Output,
    sink: &mut dyn Write,
) -> Result<()> {
    session.set_query(query);
    let result = session.results();
    if out.format.is_json() {
        writeln!(sink, "{}", serde_json::to_string(&result)?)?;
        return Ok(());
    }
    writeln!(sink, "--- {:?} ---", session.query())?;
    if result.is_empty_query() {
        writeln!(sink, "(results cleared)")?;
    } else {
        writeln!(sink, "{}", render_results(&result, out.markers))?;
    }
    Ok(())
}

/// Feeds `input` lines through the debouncer and writes each search to `sink`.
///
/// Returns the number of searches that ran.
pub(crate) async fn live_search<R>(
    session: &mut BrowserSession,
    input: R,
    delay: Duration,
    out: Output,
    sink: &mut dyn Write,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    if let Some(notice) = load_error_output(session, out.format)? {
        writeln!(sink, "{notice}")?;
    }

    let (tx, rx) = mpsc::channel::<String>(64);
    let reader = tokio::spawn(async move {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if tx.send(line).await.is_err() {
                break;
            }
        }
        Ok::<_, std::io::Error>(())
    });

    let mut failure: Option<anyhow::Error> = None;
    let fired = run_debounced(rx, delay, |query| {
        if failure.is_some() {
            return;
        }
        if let Err(e) = write_results(session, query, out, sink) {
            failure = Some(e);
        }
    })
    .await;

    reader.await??;
    if let Some(e) = failure {
        return Err(e);
    }
    tracing::debug!(fired, "live search finished");
    Ok(fired)
}

/// Handle the `live` command.
pub(crate) async fn handle_live_command(
    session: &mut BrowserSession,
    delay: Duration,
    out: Output,
) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    live_search(session, stdin, delay, out, &mut stdout).await?;
    Ok(())
}
