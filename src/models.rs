//! Frontend Models
//!
//! Data structures matching the backend's REST payloads.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Task lifecycle state, ordered `Not Started -> In Progress -> Completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskState {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskState {
    pub const ALL: [TaskState; 3] = [
        TaskState::NotStarted,
        TaskState::InProgress,
        TaskState::Completed,
    ];

    /// Wire string, also used as display label
    pub fn label(&self) -> &'static str {
        match self {
            TaskState::NotStarted => "Not Started",
            TaskState::InProgress => "In Progress",
            TaskState::Completed => "Completed",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.label() == s)
    }

    /// The single forward step offered by the UI. `None` once completed.
    pub fn next(&self) -> Option<TaskState> {
        match self {
            TaskState::NotStarted => Some(TaskState::InProgress),
            TaskState::InProgress => Some(TaskState::Completed),
            TaskState::Completed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TaskState::NotStarted => "state-not-started",
            TaskState::InProgress => "state-in-progress",
            TaskState::Completed => "state-completed",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: TaskState,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub owner_id: Option<u32>,
}

impl Task {
    /// Creation date as `YYYY-MM-DD`, or the raw timestamp if it can't be parsed
    pub fn created_date(&self) -> String {
        format_date(&self.created_at)
    }

    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.trim().is_empty())
    }
}

fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Body for `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

/// Partial body for `PUT /tasks/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<TaskState>,
}

impl TaskUpdate {
    pub fn state(state: TaskState) -> Self {
        Self {
            state: Some(state),
            ..Default::default()
        }
    }
}

/// Authenticated user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u32>,
    pub username: String,
    pub email: String,
}

/// Body for `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct Registration<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Body for `POST /ai/command`
#[derive(Debug, Clone, Serialize)]
pub struct AiCommand<'a> {
    pub command: &'a str,
}

/// What the backend did with an AI command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AiAction {
    Create,
    UpdateState,
    Delete,
    UpdateDetails,
    View,
    #[serde(other)]
    Other,
}

impl AiAction {
    /// Actions that changed the task collection on the backend
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            AiAction::Create | AiAction::UpdateState | AiAction::Delete | AiAction::UpdateDetails
        )
    }
}

/// Task as attached to an AI reply (a trimmed-down record)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: u32,
    pub title: String,
    pub state: TaskState,
    #[serde(default)]
    pub description: Option<String>,
}

/// Optional payload of an AI reply; only `tasks` is read
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AiData {
    #[serde(default)]
    pub tasks: Option<Vec<TaskSummary>>,
}

/// Response of `POST /ai/command`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AiReply {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub action: Option<AiAction>,
    #[serde(default)]
    pub data: Option<AiData>,
}

impl AiReply {
    /// A successful reply whose action changed tasks on the backend
    pub fn requires_reload(&self) -> bool {
        self.success && self.action.is_some_and(|a| a.is_mutating())
    }
}
