//! Data types and goal options offered by the wizard.

use serde::Serialize;
use std::fmt;

/// Kind of sequencing data the user has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Marker-gene amplicons (16S/ITS).
    Amplicon,
    /// Shotgun metagenomics.
    Shotgun,
    /// Isolate genomes.
    Genomes,
    /// Transcriptomics.
    Rnaseq,
    /// Variant analysis.
    Variants,
}

impl DataType {
    /// All data types in menu order.
    pub const ALL: [DataType; 5] = [
        DataType::Amplicon,
        DataType::Shotgun,
        DataType::Genomes,
        DataType::Rnaseq,
        DataType::Variants,
    ];

    /// Stable key used on the command line and in the table.
    pub fn key(&self) -> &'static str {
        match self {
            DataType::Amplicon => "amplicon",
            DataType::Shotgun => "shotgun",
            DataType::Genomes => "genomes",
            DataType::Rnaseq => "rnaseq",
            DataType::Variants => "variants",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Amplicon => "Amplicon (16S/ITS)",
            DataType::Shotgun => "Metagenômica (Shotgun)",
            DataType::Genomes => "Genomas de isolados",
            DataType::Rnaseq => "Transcriptômica (RNA-seq)",
            DataType::Variants => "Análise de variantes",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parses a data type key, ignoring ASCII case.
///
/// ```
/// use biocat_recommend::{parse_data_type, DataType};
///
/// assert_eq!(parse_data_type("RNAseq"), Some(DataType::Rnaseq));
/// assert_eq!(parse_data_type(""), None);
/// ```
pub fn parse_data_type(key: &str) -> Option<DataType> {
    DataType::ALL
        .into_iter()
        .find(|dt| dt.key().eq_ignore_ascii_case(key.trim()))
}

/// One entry of a goal menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GoalOption {
    /// Goal key; empty for the blank sentinel.
    pub key: &'static str,
    /// Menu label.
    pub label: &'static str,
}

impl GoalOption {
    /// True for the "select..." placeholder.
    pub fn is_blank(&self) -> bool {
        self.key.is_empty()
    }
}

/// Placeholder that heads every goal menu and never has a recommendation.
pub const BLANK_GOAL: GoalOption = GoalOption {
    key: "",
    label: "Selecione...",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_parser() {
        for dt in DataType::ALL {
            assert_eq!(parse_data_type(dt.key()), Some(dt));
            assert_eq!(dt.to_string(), dt.key());
        }
    }

    #[test]
    fn unknown_keys_do_not_parse() {
        assert_eq!(parse_data_type("proteomics"), None);
        assert_eq!(parse_data_type("rna-seq"), None);
    }

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(
            serde_json::to_value(DataType::Rnaseq).unwrap(),
            serde_json::json!("rnaseq")
        );
    }
}
