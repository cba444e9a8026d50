//! Interactive "where do I start?" guide.

use std::fmt;

use anyhow::Result;
use biocat_recommend::DataType;
use inquire::{Confirm, InquireError, Select};

use super::{emit, load_error_output, Output};
use crate::render::{render_recommendation, render_tools};
use crate::session::BrowserSession;

/// A menu entry showing `label` and carrying `value`.
struct Choice<T> {
    label: &'static str,
    value: T,
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Maps a user abort (Esc / Ctrl-C) to `None`.
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Handle the `wizard` command.
pub(crate) fn handle_wizard_command(session: &mut BrowserSession, out: Output) -> Result<()> {
    let types: Vec<Choice<DataType>> = DataType::ALL
        .iter()
        .map(|dt| Choice {
            label: dt.label(),
            value: *dt,
        })
        .collect();
    let Some(picked) = answered(Select::new("What kind of data do you have?", types).prompt())?
    else {
        return Ok(());
    };
    session.wizard_mut().select_data_type(Some(picked.value));

    let goals: Vec<Choice<&'static str>> = session
        .wizard()
        .goal_options()
        .iter()
        .filter(|g| !g.is_blank())
        .map(|g| Choice {
            label: g.label,
            value: g.key,
        })
        .collect();
    let Some(goal) = answered(Select::new("What do you want to find out?", goals).prompt())? else {
        return Ok(());
    };
    session.wizard_mut().select_goal(goal.value);

    let Some(recommendation) = session.wizard().recommendation() else {
        println!("No workflow suggestion for this combination.");
        return Ok(());
    };
    println!("{}", render_recommendation(recommendation));

    if session.wizard().suggested_tools().is_empty() {
        return Ok(());
    }
    let show = answered(
        Confirm::new("Show the tools of this workflow?")
            .with_default(true)
            .prompt(),
    )?
    .unwrap_or(false);
    if !show {
        return Ok(());
    }

    println!();
    if let Some(notice) = load_error_output(session, out.format)? {
        emit(&notice);
        return Ok(());
    }
    let tools = session.show_suggested_tools();
    emit(&render_tools(&tools, out.markers));
    Ok(())
}
