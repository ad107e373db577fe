//! Output file naming conventions.
//!
//! Pure string functions. Each documentation request writes one file whose
//! name carries a second-resolution local timestamp.

use jiff::Zoned;

pub const DOCUMENTATION_PREFIX: &str = "dbml_explanations";

/// File name for a documentation PDF generated at `at`,
/// e.g. `dbml_explanations_20260314_091502.pdf`.
///
/// Sub-second precision is dropped, so two reports finished within the same
/// second share a name and the later write replaces the earlier file. Both
/// responses then point at the surviving report.
pub fn documentation_pdf(at: &Zoned) -> String {
    format!("{DOCUMENTATION_PREFIX}_{}.pdf", at.strftime("%Y%m%d_%H%M%S"))
}
