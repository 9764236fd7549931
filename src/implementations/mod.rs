pub mod config;
pub mod prompt_builder;
pub mod schema_builder;
pub mod gemini_client;
pub mod hdl_generator;
pub mod store;
pub mod persistence;
pub mod session;
pub mod render;
