use std::sync::Arc;

use async_trait::async_trait;
use log::{ debug, error, info, warn };
use serde_json::Value;

use crate::errors::{ RtlForgeError, RtlForgeResult };
use crate::implementations::prompt_builder::{
    build_exploration_prompt,
    build_prompt,
    EXPLORATION_FILENAME,
};
use crate::implementations::schema_builder::build_schema;
use crate::models::artifact::{ Artifact, GenerationResult };
use crate::models::deliverable::EXPLORATION_RESULT_KEY;
use crate::models::request::GenerationRequest;
use crate::traits::design_assistant::DesignAssistant;
use crate::traits::model_client::{ GenerationOptions, ModelClient, ModelRequest };

const JSON_MIME_TYPE: &str = "application/json";

/// Generates hardware deliverables by prompting a hosted model.
///
/// The model client is injected so credentials and transport are settled
/// before the first request.
///
/// # Usage Example
/// ```rust,no_run
/// use std::sync::Arc;
/// use rtlforge::{ AppState, DesignAssistant, GeminiClient, GeneratorConfig, LLMHdlGenerator };
///
/// async fn generate_example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GeminiClient::from_config(&GeneratorConfig::default())?;
///     let generator = LLMHdlGenerator::new(Arc::new(client));
///
///     let request = AppState::default().to_request()?;
///     let result = generator.generate(&request).await?;
///
///     for (key, artifact) in result.iter() {
///         println!("{} -> {}", key, artifact.filename);
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct LLMHdlGenerator {
    client: Arc<dyn ModelClient>,
}

impl LLMHdlGenerator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Reasoning is switched off unless the caller asked for it
    fn thinking_budget(use_extended_reasoning: bool) -> Option<u32> {
        if use_extended_reasoning { None } else { Some(0) }
    }

    async fn call_model(&self, prompt: String, options: GenerationOptions) -> RtlForgeResult<String> {
        let request = ModelRequest {
            model: self.client.model().to_string(),
            prompt,
            options,
        };

        self.client
            .invoke(request).await
            .map(|response| response.text)
            .map_err(|e| {
                error!("Model call failed: {}", e);
                RtlForgeError::Upstream(e.to_string())
            })
    }
}

/// JavaScript-style truthiness of a JSON value
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Parse the model's JSON reply into artifacts for the requested deliverables.
///
/// Falsy entries and keys nobody asked for are dropped; the model is never
/// trusted to leave unselected properties out.
pub fn parse_generation_reply(
    raw: &str,
    selected_ids: &[String]
) -> RtlForgeResult<GenerationResult> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        error!("Failed to parse JSON response from AI: {}", e);
        error!("Received invalid JSON: {}", raw);
        RtlForgeError::MalformedResponse(e.to_string())
    })?;

    let Value::Object(entries) = parsed else {
        error!("Expected a JSON object, received: {}", raw);
        return Err(RtlForgeError::MalformedResponse("top-level value is not an object".to_string()));
    };

    let mut result = GenerationResult::new();
    for (key, value) in entries {
        if !is_truthy(&value) {
            debug!("Dropping empty entry for {}", key);
            continue;
        }
        if !selected_ids.iter().any(|id| *id == key) {
            warn!("Model returned unrequested deliverable {}; ignoring it", key);
            continue;
        }

        let artifact: Artifact = serde_json::from_value(value).map_err(|e| {
            error!("Entry {} does not match the file schema: {}", key, e);
            error!("Received: {}", raw);
            RtlForgeError::MalformedResponse(format!("{}: {}", key, e))
        })?;
        result.insert(key, artifact);
    }

    Ok(result)
}

#[async_trait]
impl DesignAssistant for LLMHdlGenerator {
    async fn generate(&self, request: &GenerationRequest) -> RtlForgeResult<GenerationResult> {
        info!(
            "Generating {} deliverable(s) in {}",
            request.selected_deliverable_ids.len(),
            request.hdl_language
        );

        let prompt = build_prompt(
            &request.description,
            request.hdl_language,
            &request.selected_deliverable_ids,
            &request.protocol,
            &request.architecture,
            &request.simulation_tool
        );
        let schema = build_schema(&request.selected_deliverable_ids);

        let options = GenerationOptions {
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
            response_schema: Some(schema.to_json()),
            thinking_budget: Self::thinking_budget(request.use_extended_reasoning),
        };

        let raw = self.call_model(prompt, options).await?;
        let json_text = raw.trim();
        if json_text.is_empty() {
            warn!("Model returned an empty response");
            return Err(RtlForgeError::EmptyResponse);
        }

        let result = parse_generation_reply(json_text, &request.selected_deliverable_ids)?;
        info!("Received {} artifact(s)", result.len());
        Ok(result)
    }

    async fn explore(
        &self,
        description: &str,
        use_extended_reasoning: bool
    ) -> RtlForgeResult<GenerationResult> {
        info!("Exploring architectures");

        let options = GenerationOptions {
            thinking_budget: Self::thinking_budget(use_extended_reasoning),
            ..GenerationOptions::default()
        };

        let text = self.call_model(build_exploration_prompt(description), options).await?;
        if text.trim().is_empty() {
            warn!("Model returned an empty response");
            return Err(RtlForgeError::EmptyResponse);
        }

        let mut result = GenerationResult::new();
        result.insert(EXPLORATION_RESULT_KEY, Artifact::new(EXPLORATION_FILENAME, "Markdown", text));
        Ok(result)
    }
}
