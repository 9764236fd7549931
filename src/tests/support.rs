use std::sync::Mutex;

use async_trait::async_trait;
use log::{ debug, info };

use crate::traits::model_client::{ ModelClient, ModelClientError, ModelRequest, ModelResponse };

// Setup function to initialize logging and environment
pub fn setup() {
    // Logger may already be initialized by another test
    if env_logger::builder().is_test(true).try_init().is_ok() {
        info!("Logger initialized");
    }

    if let Err(e) = dotenv::dotenv() {
        debug!("Could not load .env file: {}", e);
    }
}

/// What the stub answers with
pub enum StubReply {
    Text(String),
    Fail(String),
}

/// Model client that records every request and answers with a canned reply
pub struct StubModelClient {
    reply: StubReply,
    pub requests: Mutex<Vec<ModelRequest>>,
}

impl StubModelClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { reply: StubReply::Text(text.into()), requests: Mutex::new(Vec::new()) }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { reply: StubReply::Fail(message.into()), requests: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<ModelRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelClient for StubModelClient {
    fn model(&self) -> &str {
        "stub-model"
    }

    async fn invoke(&self, request: ModelRequest) -> Result<ModelResponse, ModelClientError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            StubReply::Text(text) => Ok(ModelResponse { text: text.clone() }),
            StubReply::Fail(message) => Err(ModelClientError::Api(message.clone())),
        }
    }
}
