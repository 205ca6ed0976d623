//! Auth Endpoints

use reqwest::Method;

use super::{read_json, ApiClient};
use crate::error::ApiError;
use crate::models::{Registration, TokenResponse, User};

impl ApiClient {
    pub async fn register(&self, registration: &Registration<'_>) -> Result<User, ApiError> {
        read_json(self.request(Method::POST, "/auth/register").json(registration)).await
    }

    /// Exchange credentials for a bearer token. The caller decides whether to keep it.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = [("username", username), ("password", password)];
        read_json(self.request(Method::POST, "/auth/login").form(&form)).await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        read_json(self.request(Method::GET, "/auth/me")).await
    }
}
