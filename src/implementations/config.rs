use serde::{ Deserialize, Serialize };
use std::fs;
use std::path::{ Path, PathBuf };
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Missing required API key: {0}")]
    MissingApiKey(String),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(String),
}

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// API key for the model provider
    pub api_key: Option<String>,

    /// Base URL of the provider's REST API
    pub api_endpoint: Option<String>,

    /// Model identifier
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Model provider connection settings
    pub api: ApiConfig,

    /// Timeout for a single model call, in seconds
    pub request_timeout_secs: u64,

    /// Directory holding the persisted form state
    pub state_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Get the API key, checking environment variables if not in config
    pub fn get_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_api_key(|name| std::env::var(name).ok())
    }

    /// Key resolution against an arbitrary variable source
    pub fn resolve_api_key<F>(&self, lookup: F) -> Result<String, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        use log::debug;

        if let Some(api_key) = self.api.api_key.as_ref().filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from config");
            return Ok(api_key.clone());
        }

        for name in API_KEY_ENV_VARS {
            match lookup(name) {
                Some(key) if !key.trim().is_empty() => {
                    debug!("Using API key from {}", name);
                    return Ok(key);
                }
                _ => debug!("{} not set", name),
            }
        }

        Err(
            ConfigError::MissingApiKey(
                format!("set api.api_key or one of {}", API_KEY_ENV_VARS.join(", "))
            )
        )
    }

    pub fn endpoint(&self) -> String {
        self.api.api_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string())
    }

    pub fn model(&self) -> String {
        self.api.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Where the form state lives, defaulting to `.rtlforge` in the working directory
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| PathBuf::from(".rtlforge"))
    }
}

/// Default configuration
impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            api: ApiConfig {
                api_key: None,
                api_endpoint: Some(DEFAULT_API_ENDPOINT.to_string()),
                model: Some(DEFAULT_MODEL.to_string()),
            },
            request_timeout_secs: 120,
            state_dir: None,
        }
    }
}
