//! CLI handlers for the `goals` and `recommend` commands.

use anyhow::Result;
use biocat_catalog::Tool;
use biocat_recommend::{goals_for, recommendation_for, DataType, GoalOption, Recommendation};
use serde::Serialize;

use super::{emit, load_error_output, Output};
use crate::render::{render_goals, render_recommendation, render_tools};
use crate::session::BrowserSession;

#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    data_type: DataType,
    goal: &'a str,
    recommendation: Option<&'static Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<&'a Tool>>,
}

pub(crate) fn goals_output(data_type: DataType, out: Output) -> Result<String> {
    if out.format.is_json() {
        let goals: Vec<&GoalOption> = goals_for(data_type)
            .iter()
            .filter(|g| !g.is_blank())
            .collect();
        return Ok(serde_json::to_string_pretty(&goals)?);
    }
    Ok(render_goals(data_type))
}

/// Builds the recommendation output; with a session, also the workflow's tool cards.
pub(crate) fn recommend_output(
    data_type: DataType,
    goal: &str,
    session: Option<&mut BrowserSession>,
    out: Output,
) -> Result<String> {
    let Some(session) = session else {
        let recommendation = recommendation_for(data_type, goal);
        return render_recommend(data_type, goal, recommendation, None, out);
    };

    session.wizard_mut().select_data_type(Some(data_type));
    session.wizard_mut().select_goal(goal);
    let recommendation = session.wizard().recommendation();

    if recommendation.is_none() {
        return render_recommend(data_type, goal, None, None, out);
    }
    if let Some(notice) = load_error_output(session, out.format)? {
        let head = render_recommend(data_type, goal, recommendation, None, out)?;
        return Ok(format!("{head}\n\n{notice}"));
    }
    let tools = session.show_suggested_tools();
    render_recommend(data_type, goal, recommendation, Some(tools), out)
}

fn render_recommend(
    data_type: DataType,
    goal: &str,
    recommendation: Option<&'static Recommendation>,
    tools: Option<Vec<&Tool>>,
    out: Output,
) -> Result<String> {
    if out.format.is_json() {
        let body = RecommendOutput {
            data_type,
            goal,
            recommendation,
            tools,
        };
        return Ok(serde_json::to_string_pretty(&body)?);
    }
    let Some(recommendation) = recommendation else {
        return Ok(format!(
            "No workflow suggestion for {}/{}. Run `biocat goals {}` to see the options.",
            data_type.key(),
            goal,
            data_type.key()
        ));
    };
    let mut text = render_recommendation(recommendation);
    if let Some(tools) = tools {
        let cards = render_tools(&tools, out.markers);
        if !cards.is_empty() {
            text.push_str("\n\n");
            text.push_str(&cards);
        }
    }
    Ok(text)
}

/// Handle the `goals` command.
pub(crate) fn handle_goals_command(data_type: DataType, out: Output) -> Result<()> {
    emit(&goals_output(data_type, out)?);
    Ok(())
}

/// Handle the `recommend` command.
pub(crate) fn handle_recommend_command(
    data_type: DataType,
    goal: &str,
    session: Option<&mut BrowserSession>,
    out: Output,
) -> Result<()> {
    emit(&recommend_output(data_type, goal, session, out)?);
    Ok(())
}
