//! Authentication Flow
//!
//! Credential validation, login/register exchange and the startup session check.

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::models::{Registration, User};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Shown when an auth request fails without a backend detail
pub const AUTH_FAILED: &str = "Authentication failed";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Register",
            AuthMode::Register => "Already have an account? Login",
        }
    }
}

/// Credentials as typed into the auth view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AuthForm {
    /// Checks run before any request is issued
    pub fn validate(&self, mode: AuthMode) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("Username is required");
        }
        if mode == AuthMode::Register && self.email.trim().is_empty() {
            return Err("Email is required");
        }
        if self.password.is_empty() {
            return Err("Password is required");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters");
        }
        Ok(())
    }
}

/// Log in (registering first in register mode) and keep the issued token.
///
/// The token is stored only once login succeeds. A registration that succeeds
/// followed by a failed login leaves the account created and the session empty.
pub async fn authenticate(client: &ApiClient, mode: AuthMode, form: &AuthForm) -> Result<(), ApiError> {
    let username = form.username.trim();

    if mode == AuthMode::Register {
        let user = client
            .register(&Registration {
                username,
                email: form.email.trim(),
                password: &form.password,
            })
            .await?;
        log::info!("[AUTH] Registered {}", user.username);
    }

    let token = client.login(username, &form.password).await?;
    client.session().acquire(&token.access_token);
    log::info!("[AUTH] Logged in as {}", username);
    Ok(())
}

/// Startup check: resolve the stored token to a user, dropping it if rejected
pub async fn resume_session(client: &ApiClient) -> Option<User> {
    if !client.session().is_active() {
        return None;
    }
    match client.current_user().await {
        Ok(user) => Some(user),
        Err(err) => {
            if err.is_unauthorized() {
                log::info!("[AUTH] Stored token expired");
            } else {
                log::warn!("[AUTH] Session check failed: {}", err);
            }
            client.session().clear();
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, email: &str, password: &str) -> AuthForm {
        AuthForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_login_validation() {
        assert_eq!(form("", "", "secret1").validate(AuthMode::Login), Err("Username is required"));
        assert_eq!(form("   ", "", "secret1").validate(AuthMode::Login), Err("Username is required"));
        assert_eq!(form("alice", "", "").validate(AuthMode::Login), Err("Password is required"));
        assert_eq!(
            form("alice", "", "12345").validate(AuthMode::Login),
            Err("Password must be at least 6 characters")
        );
        // Email only matters when registering
        assert_eq!(form("alice", "", "123456").validate(AuthMode::Login), Ok(()));
    }

    #[test]
    fn test_register_requires_email() {
        assert_eq!(form("alice", "", "123456").validate(AuthMode::Register), Err("Email is required"));
        assert_eq!(form("alice", "a@example.com", "123456").validate(AuthMode::Register), Ok(()));
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggled().submit_label(), "Login");
    }
}
