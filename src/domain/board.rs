use crate::domain::project::ProjectStatus;
use crate::domain::validation::Constraints;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Configuration for a board column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub status: ProjectStatus,
}

impl Column {
    pub fn new(name: String, status: ProjectStatus) -> Self {
        Self { name, status }
    }
}

/// Constraints applied to each field of the project form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRules {
    pub title: Constraints,
    pub description: Constraints,
    pub people: Constraints,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: Constraints {
                required: true,
                ..Constraints::default()
            },
            description: Constraints {
                required: true,
                min_length: Some(5),
                ..Constraints::default()
            },
            people: Constraints {
                required: true,
                min_value: Some(1.0),
                ..Constraints::default()
            },
        }
    }
}

/// How the store generates project ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Random,
    Sequential { prefix: String },
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub form: FormRules,
    #[serde(default)]
    pub ids: IdStrategy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Project Board".to_string(),
            columns: vec![
                Column::new("active".to_string(), ProjectStatus::Active),
                Column::new("finished".to_string(), ProjectStatus::Finished),
            ],
            form: FormRules::default(),
            ids: IdStrategy::default(),
        }
    }
}

impl BoardConfig {
    /// Parses and validates a JSON board configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that no status is bound to more than one column
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.status) {
                return Err(BoardError::ConfigError(format!(
                    "status '{}' is bound to more than one column",
                    column.status.as_str()
                )));
            }
        }
        Ok(())
    }

    /// Gets the column configuration for a status
    pub fn get_column_for_status(&self, status: ProjectStatus) -> Option<&Column> {
        self.columns.iter().find(|col| col.status == status)
    }
}
