use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use cartograph_core::output_names;
use cartograph_export::logo::{LogoAsset, load_logo};
use cartograph_export::render::render_explanations;
use cartograph_llm::transaction::explain_all;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DocumentationRequest {
    pub dbml_inputs: Vec<String>,
}

#[derive(Serialize)]
pub struct DocumentationResponse {
    pub message: String,
    pub pdf_file: String,
    pub explanations: Vec<String>,
}

/// Explain each DBML input with the model, then render every explanation
/// into one timestamped PDF report.
///
/// Model calls run one after another. If any fails, the request fails and
/// no report is written.
pub async fn generate_documentation(
    State(state): State<AppState>,
    payload: Result<Json<DocumentationRequest>, JsonRejection>,
) -> Result<Json<DocumentationResponse>, ApiError> {
    let Json(req) = payload?;

    let explanations = explain_all(state.model.as_ref(), &state.prompts, &req.dbml_inputs).await?;

    let pdf_file = output_names::documentation_pdf(&jiff::Zoned::now());
    let path = state.output_dir.join(&pdf_file);

    let styles = state.styles.clone();
    let logo_path = state.logo_path.clone();
    let sections = explanations.clone();
    tokio::task::spawn_blocking(move || {
        let logo = logo_path
            .as_deref()
            .map(load_logo)
            .unwrap_or(LogoAsset::Absent);
        render_explanations(&sections, &path, &styles, &logo)
    })
    .await??;

    Ok(Json(DocumentationResponse {
        message: "Documentation generated successfully".to_string(),
        pdf_file,
        explanations,
    }))
}
