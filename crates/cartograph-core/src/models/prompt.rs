use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of tasks the service knows how to prompt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Explain one DBML table definition in prose.
    DbmlExplanation,
    /// Convert SQL DDL into DBML.
    SqlToDbml,
}

impl TaskKind {
    pub const ALL: [TaskKind; 2] = [TaskKind::DbmlExplanation, TaskKind::SqlToDbml];

    /// Key of this task in the prompt file.
    pub fn key(self) -> &'static str {
        match self {
            TaskKind::DbmlExplanation => "dbml_explanation",
            TaskKind::SqlToDbml => "sql_to_dbml",
        }
    }

    /// Name of the single variable the user template substitutes.
    pub fn placeholder(self) -> &'static str {
        match self {
            TaskKind::DbmlExplanation => "dbml_input",
            TaskKind::SqlToDbml => "sql_input",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A system message plus a user message template, as stored in the
/// prompt file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub system_message: String,
    pub user_template: String,
}
