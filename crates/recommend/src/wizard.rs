//! Two-step "where do I start?" wizard.
//!
//! `NoType → TypeSelected(dt) → GoalSelected(dt, goal)`. Picking a data type
//! always resets the goal; picking the blank goal clears the recommendation.

use crate::table::{goals_for, recommendation_for, Recommendation};
use crate::types::{DataType, GoalOption};

/// Current wizard selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WizardState {
    /// Nothing selected; the goal menu is hidden.
    #[default]
    NoType,
    /// A data type is selected, no goal yet.
    TypeSelected(DataType),
    /// Both selected.
    GoalSelected {
        /// Selected data type.
        data_type: DataType,
        /// Selected goal key as given.
        goal: String,
    },
}

/// Owns the wizard selection and the recommendation derived from it.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    state: WizardState,
    recommendation: Option<&'static Recommendation>,
}

impl Wizard {
    /// A wizard with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Selected data type, if any.
    pub fn data_type(&self) -> Option<DataType> {
        match &self.state {
            WizardState::NoType => None,
            WizardState::TypeSelected(dt) => Some(*dt),
            WizardState::GoalSelected { data_type, .. } => Some(*data_type),
        }
    }

    /// Goal menu for the selected data type; empty while no type is selected.
    pub fn goal_options(&self) -> &'static [GoalOption] {
        self.data_type().map(goals_for).unwrap_or_default()
    }

    /// Selects (or clears, with `None`) the data type.
    pub fn select_data_type(&mut self, data_type: Option<DataType>) {
        self.recommendation = None;
        self.state = match data_type {
            Some(dt) => WizardState::TypeSelected(dt),
            None => WizardState::NoType,
        };
        tracing::debug!(state = ?self.state, "wizard data type selected");
    }

    /// Selects a goal under the current data type.
    ///
    /// Ignored while no data type is selected.
    pub fn select_goal(&mut self, goal: &str) {
        let Some(data_type) = self.data_type() else {
            tracing::debug!(goal, "goal ignored without a data type");
            return;
        };
        if goal.trim().is_empty() {
            self.state = WizardState::TypeSelected(data_type);
            self.recommendation = None;
        } else {
            self.state = WizardState::GoalSelected {
                data_type,
                goal: goal.to_string(),
            };
            self.recommendation = recommendation_for(data_type, goal);
        }
        tracing::debug!(
            state = ?self.state,
            has_recommendation = self.recommendation.is_some(),
            "wizard goal selected"
        );
    }

    /// Recommendation for the current selection.
    pub fn recommendation(&self) -> Option<&'static Recommendation> {
        self.recommendation
    }

    /// Tools behind the "show tools" action; empty means no action.
    pub fn suggested_tools(&self) -> &'static [&'static str] {
        self.recommendation.map(|r| r.tools).unwrap_or_default()
    }
}
