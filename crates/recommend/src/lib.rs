//! Analysis-workflow recommendations.
//!
//! This crate provides:
//! - The fixed goal options for each [`DataType`]
//! - An explicit (data type × goal) table of recommended tools
//! - Plain-text rendering of each recommendation's explanation
//! - The [`Wizard`] state machine that drives when a recommendation is shown
//!
//! Nothing here depends on the catalog; tool names are plain strings.

pub mod explainer;
pub mod table;
pub mod types;
pub mod wizard;

pub use explainer::{render_explanation, Explanation, Step};
pub use table::{
    all_recommendations, goals_for, lookup_recommendation, recommendation_for, Recommendation,
};
pub use types::{parse_data_type, DataType, GoalOption, BLANK_GOAL};
pub use wizard::{Wizard, WizardState};
