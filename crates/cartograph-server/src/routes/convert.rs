use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use cartograph_llm::transaction::convert_sql;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ConvertRequest {
    pub sql_input: String,
}

#[derive(Serialize)]
pub struct ConvertResponse {
    pub message: String,
    pub dbml_output: String,
}

/// Convert SQL DDL to DBML with a single model call.
pub async fn convert_sql_to_dbml(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let Json(req) = payload?;

    let dbml_output = convert_sql(state.model.as_ref(), &state.prompts, &req.sql_input).await?;

    Ok(Json(ConvertResponse {
        message: "SQL converted to DBML successfully".to_string(),
        dbml_output,
    }))
}
