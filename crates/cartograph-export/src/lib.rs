//! cartograph-export
//!
//! Page layout and PDF generation for formatted schema explanations.

pub mod error;
pub mod layout;
pub mod logo;
pub mod metrics;
pub mod pdf;
pub mod render;
pub mod styles;
