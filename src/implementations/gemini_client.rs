use async_trait::async_trait;
use log::{ debug, info, warn };
use serde::Serialize;
use serde_json::Value;

use crate::implementations::config::{ ConfigError, GeneratorConfig };
use crate::traits::model_client::{
    GenerationOptions,
    ModelClient,
    ModelClientError,
    ModelRequest,
    ModelResponse,
};

/// Gemini `generateContent` request types
#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct ThinkingConfig {
    #[serde(rename = "thinkingBudget")]
    thinking_budget: u32,
}

#[derive(Debug, Serialize, Default)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

/// Client for the Gemini REST API.
///
/// Credentials are resolved once, when the client is built; a missing key is
/// a configuration error, not a per-request failure.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: std::time::Duration
    ) -> Result<Self, ConfigError> {
        let http_client = reqwest::Client
            ::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        let api_key = config.get_api_key()?;
        Self::new(config.endpoint(), config.model(), api_key, config.request_timeout())
    }

    fn url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.endpoint.trim_end_matches('/'), model)
    }
}

/// Serialize the request body for one prompt
pub fn request_body(prompt: &str, options: &GenerationOptions) -> Value {
    let body = GenerateContentRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: options.response_mime_type.as_deref(),
            response_schema: options.response_schema.as_ref(),
            thinking_config: options.thinking_budget.map(|thinking_budget| ThinkingConfig {
                thinking_budget,
            }),
        },
    };
    serde_json::to_value(&body).unwrap_or_default()
}

/// Concatenate the text parts of the first candidate.
///
/// A reply with no candidates or no text parts yields an empty string; the
/// caller decides what an empty reply means.
pub fn extract_text(response: &Value) -> String {
    response["candidates"]
        .get(0)
        .and_then(|candidate| candidate["content"]["parts"].as_array())
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<String>()
        })
        .unwrap_or_default()
}

/// Pull the provider's own error message out of a failed response body
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json
        ::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
}

/// Map a non-success reply to an error.
///
/// The provider's message is surfaced verbatim when the body carries one;
/// otherwise the status and raw body are kept.
pub fn error_from_response(status: u16, body: &str) -> ModelClientError {
    match extract_error_message(body) {
        Some(message) => ModelClientError::Api(message),
        None =>
            ModelClientError::Http {
                status,
                message: body.to_string(),
            },
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn invoke(&self, request: ModelRequest) -> Result<ModelResponse, ModelClientError> {
        let url = self.url(&request.model);
        let body = request_body(&request.prompt, &request.options);

        info!("Making model request to {}", request.model);
        debug!("API endpoint: {}", url);
        debug!("Prompt length: {} characters", request.prompt.len());
        debug!("Thinking budget: {:?}", request.options.thinking_budget);

        let response = self.http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send().await
            .map_err(|e| {
                let error_msg = format!("Network error when calling Gemini API: {}", e);
                warn!("{}", error_msg);
                if e.is_timeout() {
                    warn!("Request timed out");
                }
                if e.is_connect() {
                    warn!("Connection error - check network connectivity");
                }
                ModelClientError::Network(error_msg)
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text().await
                .unwrap_or_else(|_| "Failed to get error message".to_string());

            warn!("API error: HTTP {} - {}", status, error_text);
            return Err(error_from_response(status, &error_text));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            warn!("Failed to decode response body: {}", e);
            ModelClientError::Parse(e.to_string())
        })?;

        if let Some(reason) = response_json["promptFeedback"]["blockReason"].as_str() {
            warn!("Prompt blocked by provider: {}", reason);
        }

        let text = extract_text(&response_json);
        info!("Received {} characters from model", text.len());

        Ok(ModelResponse { text })
    }
}
