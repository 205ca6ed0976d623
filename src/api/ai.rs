//! AI Command Endpoint

use reqwest::Method;

use super::{read_json, ApiClient};
use crate::error::ApiError;
use crate::models::{AiCommand, AiReply};

impl ApiClient {
    /// Forward free text to the backend's interpreter. Stateless: no history is sent.
    pub async fn send_command(&self, command: &str) -> Result<AiReply, ApiError> {
        read_json(self.request(Method::POST, "/ai/command").json(&AiCommand { command })).await
    }
}
