use biocat_recommend::{parse_data_type, DataType};
use clap::{Parser, Subcommand, ValueEnum};

/// Output format for command results.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable cards.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == OutputFormat::Json
    }
}

/// Command-line interface for the `biocat` application.
#[derive(Debug, Parser)]
#[command(
    name = "biocat",
    version,
    about = "Browse and search a catalog of bioinformatics tools"
)]
pub struct Cli {
    /// Catalog source: `bundled`, a JSON file, or an http(s) URL (overrides `BIOCAT_DATA`).
    #[arg(long, global = true, value_name = "SOURCE")]
    pub data: Option<String>,
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `biocat` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Searches tools by name, or by category with `categoria:"<name>"`.
    Search {
        /// Query text; an empty query clears the results.
        #[arg(default_value = "")]
        query: String,
    },
    /// Lists the tools tagged with a category (same as clicking its tag).
    Category {
        /// Category name, matched case-insensitively.
        name: String,
    },
    /// Lists every category with its tool count.
    Categories,
    /// Searches for one tool by name (guide link).
    Show {
        /// Tool name or part of it.
        name: String,
    },
    /// Lists the whole catalog in dataset order.
    List,
    /// Lists the analysis goals offered for a data type.
    Goals {
        /// Data type: amplicon, shotgun, genomes, rnaseq or variants.
        #[arg(value_parser = parse_data_type_arg)]
        data_type: DataType,
    },
    /// Shows the suggested workflow for a data type and goal.
    Recommend {
        /// Data type: amplicon, shotgun, genomes, rnaseq or variants.
        #[arg(value_parser = parse_data_type_arg)]
        data_type: DataType,
        /// Goal key as listed by `biocat goals`.
        goal: String,
        /// Also prints the cards of the workflow's tools.
        #[arg(long, default_value_t = false)]
        show_tools: bool,
    },
    /// Interactive guide: pick a data type and goal, then browse the suggested tools.
    Wizard,
    /// Search as you type: each stdin line replaces the query; searches are debounced.
    Live {
        /// Quiet period in milliseconds before a query runs (overrides `BIOCAT_DEBOUNCE_MS`).
        #[arg(long, value_name = "MILLIS")]
        debounce_ms: Option<u64>,
    },
    /// Shows or toggles the light/dark theme preference.
    Theme {
        /// Flips the stored preference.
        #[arg(long, default_value_t = false)]
        toggle: bool,
    },
    /// Diagnoses the catalog source, dataset consistency and local configuration.
    Doctor,
}

fn parse_data_type_arg(raw: &str) -> Result<DataType, String> {
    parse_data_type(raw).ok_or_else(|| {
        let known: Vec<&str> = DataType::ALL.iter().map(|dt| dt.key()).collect();
        format!("unknown data type '{raw}' (expected one of: {})", known.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_defaults_to_empty() {
        let cli = Cli::try_parse_from(["biocat", "search"]).unwrap();
        match cli.command {
            Commands::Search { query } => assert_eq!(query, ""),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["biocat", "list", "--format", "json", "--data", "x.json"])
                .unwrap();
        assert!(cli.format.is_json());
        assert_eq!(cli.data.as_deref(), Some("x.json"));
    }

    #[test]
    fn recommend_parses_data_type_case_insensitively() {
        let cli =
            Cli::try_parse_from(["biocat", "recommend", "Shotgun", "montagem", "--show-tools"])
                .unwrap();
        match cli.command {
            Commands::Recommend {
                data_type,
                goal,
                show_tools,
            } => {
                assert_eq!(data_type, DataType::Shotgun);
                assert_eq!(goal, "montagem");
                assert!(show_tools);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_data_type_is_rejected() {
        let err = Cli::try_parse_from(["biocat", "goals", "proteomics"]).unwrap_err();
        assert!(err.to_string().contains("unknown data type"));
    }
}
