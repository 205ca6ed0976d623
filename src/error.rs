//! API Errors
//!
//! Failures of a single round trip to the backend.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("backend returned {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Backend { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a backend error from an error response body of the form `{"detail": ...}`
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Backend {
            status,
            detail: extract_detail(body),
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Backend { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Backend { status: 401, .. })
    }

    /// Text shown to the user: the backend's detail if it sent one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// `detail` is either a plain string or a list of validation entries carrying `msg`
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
