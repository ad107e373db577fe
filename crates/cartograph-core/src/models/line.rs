use serde::{Deserialize, Serialize};

/// How a formatted line is styled in the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Heading,
    Subheading,
    Column,
    Property,
    Text,
}

/// One typed line of an explanation, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLine {
    pub kind: LineKind,
    pub text: String,
}

impl FormattedLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
