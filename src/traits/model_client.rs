use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelClientError {
    #[error("{0}")] Api(String),

    #[error("Network error: {0}")] Network(String),

    #[error("HTTP error: {status} - {message}")] Http {
        status: u16,
        message: String,
    },

    #[error("Failed to parse API response: {0}")] Parse(String),
}

/// Provider-side knobs for one call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationOptions {
    /// MIME type the reply must use, e.g. `application/json`
    pub response_mime_type: Option<String>,
    /// Structured-output schema in the provider's dialect
    pub response_schema: Option<Value>,
    /// Token budget for extended reasoning; `Some(0)` disables it
    pub thinking_budget: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelRequest {
    pub model: String,
    pub prompt: String,
    pub options: GenerationOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub text: String,
}

/// A hosted generative model
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Make exactly one call to the model
    async fn invoke(&self, request: ModelRequest) -> Result<ModelResponse, ModelClientError>;
}
