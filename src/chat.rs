//! Chat Transcript
//!
//! Client-local conversation with the AI endpoint. Append-only, never sent
//! back to the backend, lost on reload.

use crate::error::ApiError;
use crate::models::{AiReply, TaskSummary};

const GREETING: &str = "👋 Hi! I can help you manage tasks with natural language. Try saying:\n\
• \"Add a task to prepare presentation\"\n\
• \"Start working on presentation\"\n\
• \"Show all completed tasks\"";

/// Shown when the request fails without a backend detail
pub const COMMAND_FAILED: &str = "Failed to process command";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// Outcome reported by the backend; `None` for user turns and the greeting
    pub success: Option<bool>,
    /// Tasks the backend attached to its reply (e.g. a listing)
    pub tasks: Vec<TaskSummary>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            success: None,
            tasks: Vec::new(),
        }
    }

    pub fn assistant(text: impl Into<String>, success: Option<bool>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
            success,
            tasks: Vec::new(),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match (self.role, self.success) {
            (Role::User, _) => "chat-bubble user",
            (Role::Assistant, Some(true)) => "chat-bubble assistant success",
            (Role::Assistant, Some(false)) => "chat-bubble assistant failure",
            (Role::Assistant, None) => "chat-bubble assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A transcript opened by the assistant's greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING, None)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Echo the user's command before the request goes out
    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ChatMessage::user(text));
    }

    /// Record the outcome of a command.
    ///
    /// Returns `true` when the backend reports a successful mutating action,
    /// i.e. when the task collection must be re-fetched.
    pub fn settle(&mut self, outcome: Result<AiReply, ApiError>) -> bool {
        match outcome {
            Ok(reply) => {
                let reload = reply.requires_reload();
                let mut message = ChatMessage::assistant(reply.message, Some(reply.success));
                message.tasks = reply.data.and_then(|d| d.tasks).unwrap_or_default();
                self.messages.push(message);
                reload
            }
            Err(err) => {
                log::warn!("[CHAT] Command failed: {}", err);
                self.messages
                    .push(ChatMessage::assistant(err.user_message(COMMAND_FAILED), Some(false)));
                false
            }
        }
    }
}
