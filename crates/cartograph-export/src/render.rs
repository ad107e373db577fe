use std::path::{Path, PathBuf};

use tracing::{debug, info};

use cartograph_core::format::format_explanation;
use cartograph_core::models::line::FormattedLine;

use crate::error::ExportError;
use crate::layout::layout_document;
use crate::logo::LogoAsset;
use crate::pdf::generate_pdf;
use crate::styles::DocumentStyles;

/// Format, lay out, and write a documentation report for `explanations`.
///
/// One section per explanation, in input order. Returns `path` on success;
/// nothing is written if PDF generation fails.
pub fn render_explanations(
    explanations: &[String],
    path: &Path,
    styles: &DocumentStyles,
    logo: &LogoAsset,
) -> Result<PathBuf, ExportError> {
    let sections: Vec<Vec<FormattedLine>> = explanations
        .iter()
        .map(|explanation| format_explanation(explanation))
        .collect();

    let document = layout_document(&sections, styles, logo.is_loaded());
    debug!(
        pages = document.pages.len(),
        explanation_breaks = document.explanation_breaks(),
        overflow_breaks = document.overflow_breaks(),
        "laid out documentation report"
    );

    let bytes = generate_pdf(&document, styles, logo)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        sections = sections.len(),
        pages = document.pages.len(),
        bytes = bytes.len(),
        "wrote documentation report"
    );

    Ok(path.to_path_buf())
}
