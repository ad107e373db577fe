//! Model client capability and its HTTP implementation.
//!
//! The server only needs "given messages, return text or fail", so that is
//! all [`ModelClient`] exposes. [`OllamaClient`] speaks to a local model
//! server; tests substitute their own implementation.
//!
//! Request body:
//!
//! ```json
//! { "model": "gemma3-12b-it", "messages": [{"role": "system", "content": "..."}], "stream": false }
//! ```
//!
//! The generated text is read from `response`. Chat-style endpoints answer
//! with `message.content` instead, which is accepted as a fallback.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use cartograph_core::models::message::Message;

use crate::error::LlmError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "gemma3-12b-it";

/// Anything that can turn a conversation into generated text.
pub trait ModelClient: Send + Sync {
    /// Send one non-streaming request and return the generated text.
    fn generate<'a>(&'a self, messages: &'a [Message]) -> BoxFuture<'a, Result<String, LlmError>>;
}

/// Connection settings for [`OllamaClient`].
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub endpoint: String,
    pub model: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for a locally served model. No retries.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: Option<String>,
    message: Option<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Result<Self, LlmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| LlmError::Config(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn invoke(&self, messages: &[Message]) -> Result<String, LlmError> {
        let request = GenerateRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Invocation(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ResponseParse(e.to_string()))?;

        let text = parsed
            .response
            .or_else(|| parsed.message.map(|m| m.content))
            .ok_or_else(|| {
                LlmError::ResponseParse("no `response` or `message.content` in body".to_string())
            })?;

        debug!(model = %self.model, chars = text.len(), "model response received");
        Ok(text)
    }
}

impl ModelClient for OllamaClient {
    fn generate<'a>(&'a self, messages: &'a [Message]) -> BoxFuture<'a, Result<String, LlmError>> {
        Box::pin(self.invoke(messages))
    }
}
