use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("model endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("prompt error: {0}")]
    Prompt(#[from] cartograph_core::error::CoreError),

    #[error("client config error: {0}")]
    Config(String),
}
