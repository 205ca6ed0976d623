//! Task Endpoints

use reqwest::Method;

use super::{read_empty, read_json, ApiClient};
use crate::error::ApiError;
use crate::models::{NewTask, Task, TaskState, TaskUpdate};

impl ApiClient {
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        read_json(self.request(Method::GET, "/tasks")).await
    }

    /// Server-side filter by lifecycle state; the list view filters its snapshot locally
    #[allow(dead_code)]
    pub async fn list_tasks_by_state(&self, state: TaskState) -> Result<Vec<Task>, ApiError> {
        read_json(self.request(Method::GET, "/tasks").query(&[("state", state.label())])).await
    }

    #[allow(dead_code)]
    pub async fn get_task(&self, id: u32) -> Result<Task, ApiError> {
        read_json(self.request(Method::GET, &format!("/tasks/{}", id))).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        read_json(self.request(Method::POST, "/tasks").json(task)).await
    }

    pub async fn update_task(&self, id: u32, update: &TaskUpdate) -> Result<Task, ApiError> {
        read_json(self.request(Method::PUT, &format!("/tasks/{}", id)).json(update)).await
    }

    pub async fn delete_task(&self, id: u32) -> Result<(), ApiError> {
        read_empty(self.request(Method::DELETE, &format!("/tasks/{}", id))).await
    }
}
