use std::path::PathBuf;
use std::sync::Arc;

use cartograph_core::prompts::PromptStore;
use cartograph_export::styles::DocumentStyles;
use cartograph_llm::client::ModelClient;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub prompts: Arc<PromptStore>,
    pub model: Arc<dyn ModelClient>,
    pub styles: Arc<DocumentStyles>,
    /// Directory documentation reports are written into.
    pub output_dir: PathBuf,
    /// Branding logo, tried on every render. `None` disables it.
    pub logo_path: Option<PathBuf>,
}
