//! Plain-text rendering of search results, categories and recommendations.

use biocat_catalog::Tool;
use biocat_query::{render_highlights, CategoryCount, MatchResult, Span};
use biocat_recommend::{goals_for, render_explanation, DataType, Recommendation};
use biocat_state::Theme;

/// Shown when a non-empty query matches nothing.
pub const NO_MATCH_MESSAGE: &str = "No tools found for this term.";

const RULE: &str = "═══════════════════════════════════════════════════════════════════════";

/// Opening and closing markers wrapped around highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    pub open: &'static str,
    pub close: &'static str,
}

/// Markers for non-terminal output.
pub const PLAIN_MARKERS: Markers = Markers {
    open: "[",
    close: "]",
};

impl Markers {
    /// ANSI markers on a terminal, tuned to the theme; brackets otherwise.
    pub fn for_output(theme: Theme, is_terminal: bool) -> Markers {
        if !is_terminal {
            return PLAIN_MARKERS;
        }
        match theme {
            Theme::Dark => Markers {
                open: "\x1b[1;93m",
                close: "\x1b[0m",
            },
            Theme::Light => Markers {
                open: "\x1b[30;103m",
                close: "\x1b[0m",
            },
        }
    }
}

/// One tool card. `highlights` are byte spans into the name.
pub fn render_card(tool: &Tool, highlights: &[Span], markers: Markers) -> String {
    let name = if highlights.is_empty() {
        tool.name.clone()
    } else {
        render_highlights(&tool.name, highlights, markers.open, markers.close)
    };
    let mut lines = vec![
        name,
        format!("  Year (relevant version): {}", tool.relevant_year),
        format!("  {}", tool.description),
    ];
    if !tool.categories.is_empty() {
        lines.push(format!("  Categories: {}", tool.categories.join(", ")));
    }
    lines.push(format!("  Learn more: {}", tool.link));
    lines.join("\n")
}

/// Cards for a search outcome; empty output for an empty query.
pub fn render_results(result: &MatchResult<'_>, markers: Markers) -> String {
    if result.is_empty_query() {
        return String::new();
    }
    if result.is_no_match() {
        return NO_MATCH_MESSAGE.to_string();
    }
    result
        .matches()
        .iter()
        .map(|m| render_card(m.tool, &m.highlights, markers))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Cards without highlights, e.g. a workflow's tools.
pub fn render_tools(tools: &[&Tool], markers: Markers) -> String {
    tools
        .iter()
        .map(|tool| render_card(tool, &[], markers))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_categories(categories: &[CategoryCount]) -> String {
    let mut lines = vec![format!("Categories ({})", categories.len()), RULE.to_string()];
    for category in categories {
        let noun = if category.tools == 1 { "tool" } else { "tools" };
        lines.push(format!("  {:<40} {:>3} {noun}", category.name, category.tools));
    }
    lines.join("\n")
}

/// The goal menu for a data type, without the blank placeholder.
pub fn render_goals(data_type: DataType) -> String {
    let mut lines = vec![format!("Goals for {} ({})", data_type.label(), data_type.key())];
    for goal in goals_for(data_type).iter().filter(|g| !g.is_blank()) {
        lines.push(format!("  {:<12} {}", goal.key, goal.label));
    }
    lines.join("\n")
}

pub fn render_recommendation(recommendation: &Recommendation) -> String {
    [
        format!(
            "Suggested workflow: {} / {}",
            recommendation.data_type.label(),
            recommendation.goal
        ),
        RULE.to_string(),
        render_explanation(&recommendation.explanation),
        String::new(),
        format!("Tools: {}", recommendation.tools.join(", ")),
    ]
    .join("\n")
}
