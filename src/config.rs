//! Client Configuration
//!
//! Where the backend lives and where the session token is kept.

/// Backend base URL used when none is baked in at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// `localStorage` key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without trailing slash
    pub api_base_url: String,
    pub token_key: String,
}

impl ClientConfig {
    /// Reads `TASK_PILOT_API_URL` at compile time, falling back to the local dev server
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("TASK_PILOT_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim().trim_end_matches('/').to_string(),
            token_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}
