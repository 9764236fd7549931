use crate::models::common::{ HdlLanguage, OperationMode };

/// One submission, built fresh from the form state and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub mode: OperationMode,
    /// Trimmed, never empty
    pub description: String,
    pub hdl_language: HdlLanguage,
    pub selected_deliverable_ids: Vec<String>,
    /// "None" when absent
    pub protocol: String,
    /// "None" when absent
    pub architecture: String,
    pub simulation_tool: String,
    pub use_extended_reasoning: bool,
}
