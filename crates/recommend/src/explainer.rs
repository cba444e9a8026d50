//! Explanation content attached to each recommendation.

use serde::Serialize;

/// One numbered step of a suggested workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Short heading, e.g. "Controle de Qualidade (QC)".
    pub title: &'static str,
    /// What to do in this step.
    pub body: &'static str,
}

/// Explanatory content shown above the "show tools" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Explanation {
    /// An ordered workflow.
    Steps(&'static [Step]),
    /// A single paragraph.
    Paragraph(&'static str),
}

/// Renders an explanation as plain text.
///
/// ```
/// use biocat_recommend::{render_explanation, Explanation, Step};
///
/// const STEPS: &[Step] = &[Step { title: "QC", body: "Use FastQC." }];
/// assert_eq!(render_explanation(&Explanation::Steps(STEPS)), "1. QC: Use FastQC.");
/// ```
pub fn render_explanation(explanation: &Explanation) -> String {
    match explanation {
        Explanation::Paragraph(text) => (*text).to_string(),
        Explanation::Steps(steps) => steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}: {}", i + 1, step.title, step.body))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
