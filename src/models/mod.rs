pub mod common;
pub mod deliverable;
pub mod artifact;
pub mod request;
pub mod state;

// Re-export common model types
pub use common::{ HdlLanguage, OperationMode };
pub use deliverable::{ Deliverable, DeliverableDescriptor, DeliverableId, DeliverableRegistry };
pub use artifact::{ Artifact, GenerationResult };
pub use request::GenerationRequest;
pub use state::AppState;
