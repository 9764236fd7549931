use thiserror::Error;

use crate::implementations::config::ConfigError;

/// Custom error types for the RTL Forge system
#[derive(Debug, Error)]
pub enum RtlForgeError {
    #[error(
        "The AI model returned an empty response. This might be due to a content safety filter or an issue with the prompt. Please try again or adjust your request."
    )]
    EmptyResponse,

    #[error(
        "The AI model returned a response that was not valid JSON. This can happen on complex requests. Please try again."
    )]
    MalformedResponse(String),

    #[error("API Error: {0}")]
    Upstream(String),

    #[error("Could not render {viewer} content: {message}")]
    Render { viewer: String, message: String },

    #[error("State persistence error: {0}")]
    Persistence(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type specific to RTL Forge operations
pub type RtlForgeResult<T> = Result<T, RtlForgeError>;

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Fatal,
    Error,
    Warning,
}

impl RtlForgeError {
    /// How loudly this error should be surfaced
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RtlForgeError::Config(_) => ErrorSeverity::Fatal,
            RtlForgeError::Render { .. } | RtlForgeError::Persistence(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Recoverable vs. non-recoverable errors
pub trait RecoverableError {
    fn is_recoverable(&self) -> bool;
    fn recovery_strategy(&self) -> Option<String>;
}

impl RecoverableError for RtlForgeError {
    fn is_recoverable(&self) -> bool {
        !matches!(self, RtlForgeError::Config(_))
    }

    fn recovery_strategy(&self) -> Option<String> {
        match self {
            RtlForgeError::EmptyResponse =>
                Some("Rephrase the description or select fewer deliverables, then retry.".to_string()),
            RtlForgeError::MalformedResponse(_) =>
                Some("Retry the request; enabling --thinking often helps on complex designs.".to_string()),
            RtlForgeError::Upstream(_) =>
                Some("Check your API key, quota and network connectivity, then retry.".to_string()),
            RtlForgeError::InvalidInput(_) =>
                Some("Provide a non-empty design description.".to_string()),
            RtlForgeError::Config(_) =>
                Some("Set GEMINI_API_KEY (or api.api_key in the config file).".to_string()),
            RtlForgeError::Render { .. } | RtlForgeError::Persistence(_) => None,
        }
    }
}
