use async_trait::async_trait;

use crate::errors::RtlForgeResult;
use crate::models::artifact::GenerationResult;
use crate::models::common::OperationMode;
use crate::models::request::GenerationRequest;

/// Turns a natural-language hardware description into generated artifacts
#[async_trait]
pub trait DesignAssistant: Send + Sync {
    /// Generate the deliverables selected in `request`
    async fn generate(&self, request: &GenerationRequest) -> RtlForgeResult<GenerationResult>;

    /// Propose and compare microarchitectures for `description`
    async fn explore(
        &self,
        description: &str,
        use_extended_reasoning: bool,
    ) -> RtlForgeResult<GenerationResult>;

    /// Dispatch on the request's mode
    async fn process(&self, request: &GenerationRequest) -> RtlForgeResult<GenerationResult> {
        match request.mode {
            OperationMode::Explore =>
                self.explore(&request.description, request.use_extended_reasoning).await,
            OperationMode::Generate => self.generate(request).await,
        }
    }
}
