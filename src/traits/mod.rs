pub mod model_client;
pub mod key_value_store;
pub mod design_assistant;

// Re-export traits
pub use model_client::{
    ModelClient,
    ModelClientError,
    ModelRequest,
    ModelResponse,
    GenerationOptions,
};
pub use key_value_store::KeyValueStore;
pub use design_assistant::DesignAssistant;
