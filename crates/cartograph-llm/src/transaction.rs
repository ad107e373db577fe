use tracing::info;
use uuid::Uuid;

use cartograph_core::models::prompt::TaskKind;
use cartograph_core::prompts::PromptStore;

use crate::client::ModelClient;
use crate::error::LlmError;

/// Ask the model to explain one DBML table definition.
pub async fn explain_schema(
    client: &dyn ModelClient,
    prompts: &PromptStore,
    dbml_input: &str,
) -> Result<String, LlmError> {
    invoke_task(client, prompts, TaskKind::DbmlExplanation, dbml_input).await
}

/// Ask the model to convert SQL DDL into DBML.
pub async fn convert_sql(
    client: &dyn ModelClient,
    prompts: &PromptStore,
    sql_input: &str,
) -> Result<String, LlmError> {
    invoke_task(client, prompts, TaskKind::SqlToDbml, sql_input).await
}

/// Explain each DBML input in order, one model call at a time.
///
/// Stops at the first failure; no partial result is returned.
pub async fn explain_all(
    client: &dyn ModelClient,
    prompts: &PromptStore,
    dbml_inputs: &[String],
) -> Result<Vec<String>, LlmError> {
    let mut explanations = Vec::with_capacity(dbml_inputs.len());
    for (index, input) in dbml_inputs.iter().enumerate() {
        info!(index, total = dbml_inputs.len(), "explaining schema unit");
        explanations.push(explain_schema(client, prompts, input).await?);
    }
    Ok(explanations)
}

async fn invoke_task(
    client: &dyn ModelClient,
    prompts: &PromptStore,
    task: TaskKind,
    input: &str,
) -> Result<String, LlmError> {
    let call_id = Uuid::new_v4();
    info!(call_id = %call_id, task = %task, input_chars = input.len(), "starting model call");

    let messages = prompts.conversation(task, input)?;
    let text = client.generate(&messages).await.inspect_err(|e| {
        tracing::error!(call_id = %call_id, task = %task, error = %e, "model call failed");
    })?;

    info!(call_id = %call_id, task = %task, output_chars = text.len(), "model call complete");
    Ok(text)
}
