use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Display-only year label; the dataset carries either a number or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearLabel {
    /// A plain year such as `2019`.
    Number(i64),
    /// Free text such as `"2023 (v2)"`.
    Text(String),
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearLabel::Number(n) => write!(f, "{n}"),
            YearLabel::Text(s) => f.write_str(s),
        }
    }
}

/// A bioinformatics tool as listed in the dataset.
///
/// Field names on the wire follow the dataset boundary (`nome`, `descricao`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool name, expected unique case-insensitively.
    #[serde(rename = "nome")]
    pub name: String,
    /// Year of the relevant release.
    #[serde(rename = "ano_versao_relevante")]
    pub relevant_year: YearLabel,
    /// Free-text description.
    #[serde(rename = "descricao")]
    pub description: String,
    /// Ordered category labels.
    #[serde(rename = "categorias", default)]
    pub categories: Vec<String>,
    /// Project URL (not validated).
    pub link: String,
}

impl Tool {
    /// Returns true if any category equals `category`, ignoring case.
    pub fn has_category(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == wanted)
    }
}

/// Ordered, read-only sequence of tools.
///
/// A catalog is populated once and never mutated afterwards; there is no
/// API for adding or removing tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    tools: Vec<Tool>,
}

impl Catalog {
    /// The empty catalog used before load and after a failed load.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decodes a catalog from a JSON array of tool records.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let tools: Vec<Tool> = serde_json::from_str(raw)?;
        Ok(Self { tools })
    }

    /// Tools in source order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Finds a tool by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Tool> {
        let wanted = name.to_lowercase();
        self.tools.iter().find(|t| t.name.to_lowercase() == wanted)
    }

    /// Reports integrity problems that loading tolerates.
    pub fn diagnostics(&self) -> CatalogDiagnostics {
        let mut diag = CatalogDiagnostics::default();
        let mut seen: HashMap<String, usize> = HashMap::new();
        for (index, tool) in self.tools.iter().enumerate() {
            if tool.name.trim().is_empty() {
                diag.empty_names.push(index);
                continue;
            }
            let key = tool.name.to_lowercase();
            match seen.get(&key) {
                Some(&first_index) => diag.duplicates.push(DuplicateName {
                    name: tool.name.clone(),
                    first_index,
                    duplicate_index: index,
                }),
                None => {
                    seen.insert(key, index);
                }
            }
        }
        diag
    }
}

impl From<Vec<Tool>> for Catalog {
    fn from(tools: Vec<Tool>) -> Self {
        Self { tools }
    }
}

/// A name that appears more than once (case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateName {
    /// The name as spelled at the duplicate position.
    pub name: String,
    /// Index of the first tool with this name.
    pub first_index: usize,
    /// Index of the repeated tool.
    pub duplicate_index: usize,
}

/// Integrity report for a loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogDiagnostics {
    /// Repeated names, in catalog order of the repeat.
    pub duplicates: Vec<DuplicateName>,
    /// Indexes of tools whose name is empty or whitespace.
    pub empty_names: Vec<usize>,
}

impl CatalogDiagnostics {
    /// True when nothing was reported.
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.empty_names.is_empty()
    }
}
