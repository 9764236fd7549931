pub mod models;
pub mod traits;
pub mod errors;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use errors::{ ErrorSeverity, RecoverableError, RtlForgeError, RtlForgeResult };
pub use implementations::config::{ ConfigError, GeneratorConfig };
pub use implementations::gemini_client::GeminiClient;
pub use implementations::hdl_generator::LLMHdlGenerator;
pub use implementations::persistence::{ StatePersistence, STORAGE_KEY };
pub use implementations::prompt_builder::{ build_exploration_prompt, build_prompt };
pub use implementations::render::{ export_artifacts, Viewer };
pub use implementations::schema_builder::{ build_schema, FileSchema, ResponseSchema };
pub use implementations::session::{ progress_messages, RequestTicket, Session };
pub use implementations::store::{ FileStore, MemoryStore };
pub use models::{
    common::{
        HdlLanguage,
        OperationMode,
    },
    deliverable::{
        Deliverable,
        DeliverableDescriptor,
        DeliverableId,
        DeliverableRegistry,
        EXPLORATION_RESULT_KEY,
    },
    artifact::{
        Artifact,
        GenerationResult,
    },
    request::GenerationRequest,
    state::AppState,
};
pub use traits::{
    DesignAssistant,
    GenerationOptions,
    KeyValueStore,
    ModelClient,
    ModelClientError,
    ModelRequest,
    ModelResponse,
};
