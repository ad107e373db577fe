//! Prompt template store.
//!
//! Templates are read once from a JSON file keyed by task name:
//!
//! ```json
//! {
//!   "dbml_explanation": {
//!     "system_message": "You are a database documentation assistant.",
//!     "user_template": "Explain this table:\n{{ dbml_input }}"
//!   },
//!   "sql_to_dbml": { "system_message": "...", "user_template": "{{ sql_input }}" }
//! }
//! ```
//!
//! User templates are Tera templates with exactly one variable, named by
//! [`TaskKind::placeholder`]. The store is validated on load so that a
//! lookup by [`TaskKind`] can never fail afterwards.

use std::collections::HashMap;
use std::error::Error as _;
use std::path::Path;

use tera::{Context, Tera};
use tracing::{info, warn};

use crate::error::CoreError;
use crate::models::message::Message;
use crate::models::prompt::{PromptTemplate, TaskKind};

/// Marker rendered into each user template at load time to prove the
/// placeholder is actually substituted.
const PROBE: &str = "\u{1}cartograph-probe\u{1}";

/// Read-only set of prompt templates, one per [`TaskKind`].
#[derive(Debug, Clone)]
pub struct PromptStore {
    templates: HashMap<TaskKind, PromptTemplate>,
    tera: Tera,
}

impl PromptStore {
    /// Load and validate templates from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&contents)?;
        info!(path = %path.display(), "loaded prompt templates");
        Ok(store)
    }

    /// Parse and validate templates from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let mut raw: HashMap<String, PromptTemplate> = serde_json::from_str(json)?;

        let mut templates = HashMap::new();
        for task in TaskKind::ALL {
            let template = raw
                .remove(task.key())
                .ok_or_else(|| CoreError::MissingTemplate(task.key().to_string()))?;
            templates.insert(task, template);
        }

        for unknown in raw.keys() {
            warn!(task = %unknown, "ignoring prompt for unknown task");
        }

        Self::from_templates(templates)
    }

    /// Build a store from templates already in memory.
    ///
    /// Every [`TaskKind`] must be present.
    pub fn from_templates(templates: HashMap<TaskKind, PromptTemplate>) -> Result<Self, CoreError> {
        let mut tera = Tera::default();

        for task in TaskKind::ALL {
            let template = templates
                .get(&task)
                .ok_or_else(|| CoreError::MissingTemplate(task.key().to_string()))?;
            tera.add_raw_template(task.key(), &template.user_template)
                .map_err(|e| CoreError::TemplateParse(format!("{task}: {}", error_chain(&e))))?;
        }

        let store = Self { templates, tera };

        // Only the task's own placeholder is in the probe context, so a
        // render failure means the template reads some other variable.
        for task in TaskKind::ALL {
            let substituted = match store.render_user(task, PROBE) {
                Ok(probe) => probe.contains(PROBE),
                Err(e) => {
                    warn!(task = %task, error = %e, "user template failed probe render");
                    false
                }
            };
            if !substituted {
                return Err(CoreError::MissingPlaceholder {
                    task: task.key().to_string(),
                    placeholder: task.placeholder().to_string(),
                });
            }
        }

        Ok(store)
    }

    /// The template for a task. Total over [`TaskKind`].
    pub fn get(&self, task: TaskKind) -> &PromptTemplate {
        // Presence of every task is checked in `from_templates`.
        &self.templates[&task]
    }

    /// Substitute `input` into the task's user template.
    pub fn render_user(&self, task: TaskKind, input: &str) -> Result<String, CoreError> {
        let mut context = Context::new();
        context.insert(task.placeholder(), input);
        self.tera
            .render(task.key(), &context)
            .map_err(|e| CoreError::TemplateRender(format!("{task}: {}", error_chain(&e))))
    }

    /// Build the two-message conversation for a task: the fixed system
    /// message followed by the rendered user message.
    pub fn conversation(&self, task: TaskKind, input: &str) -> Result<Vec<Message>, CoreError> {
        let template = self.get(task);
        Ok(vec![
            Message::system(template.system_message.clone()),
            Message::user(self.render_user(task, input)?),
        ])
    }
}

/// Tera's top-level errors only name the template; the cause (an unknown
/// variable, a bad token) sits further down the source chain.
fn error_chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
