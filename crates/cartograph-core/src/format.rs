//! Explanation formatter.
//!
//! Turns the free-form text a model returns for one table into typed lines
//! the renderer can style. The model is prompted to answer in a loose shape:
//!
//! - `Table: <name>` → heading
//! - `Columns:` → subheading
//! - `<column>: <type> - <property> - <property>` → column + properties
//! - Everything else → plain text
//!
//! Emphasis markers (`*`, `**`) are stripped before classification. Every
//! input line yields at least one output line; blank lines become empty
//! text lines so paragraph spacing survives.
//!
//! Hyphens are the property separator, so a value that itself contains one
//! (`default: UTC-5`) is split too. There is no escape syntax.

use crate::models::line::{FormattedLine, LineKind};

/// Format one explanation into typed lines, preserving source order.
pub fn format_explanation(explanation: &str) -> Vec<FormattedLine> {
    let mut lines = Vec::new();

    for raw in explanation.split('\n') {
        let cleaned = clean_line(raw);

        if cleaned.starts_with("Table:") {
            lines.push(FormattedLine::new(LineKind::Heading, cleaned));
        } else if cleaned.starts_with("Columns:") {
            lines.push(FormattedLine::new(LineKind::Subheading, cleaned));
        } else if cleaned.contains(": ") {
            push_column_or_text(&mut lines, &cleaned);
        } else {
            lines.push(FormattedLine::new(LineKind::Text, cleaned));
        }
    }

    lines
}

/// Remove emphasis markers and surrounding whitespace.
fn clean_line(raw: &str) -> String {
    raw.replace('*', "").trim().to_string()
}

fn push_column_or_text(lines: &mut Vec<FormattedLine>, cleaned: &str) {
    let segments: Vec<&str> = cleaned
        .split('-')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    match segments.split_first() {
        Some((column, properties)) if !properties.is_empty() => {
            lines.push(FormattedLine::new(LineKind::Column, *column));
            for property in properties {
                lines.push(FormattedLine::new(LineKind::Property, *property));
            }
        }
        _ => lines.push(FormattedLine::new(LineKind::Text, cleaned)),
    }
}
