//! REST API Client
//!
//! Frontend bindings to the backend's REST endpoints, organized by domain.
//! Every call is a single round trip: no retry, no timeout, no caching.

mod ai;
mod auth;
mod tasks;

use leptos::prelude::*;
use reqwest::{header, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::Session;

/// HTTP client bound to one backend and one session
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, session: Session) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Start a request, attaching the bearer token when the session holds one
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, join_url(&self.base_url, path));
        match self.session.token() {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        }
    }
}

/// Get the API client from context
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status.as_u16(), &body);
    log::warn!("[API] {}", err);
    Err(err)
}

async fn read_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
    let response = send(builder).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_empty(builder: RequestBuilder) -> Result<(), ApiError> {
    send(builder).await.map(|_| ())
}


/// Round trips against a mock backend
#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use wiremock::matchers::{body_json, body_string_contains, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::{NewTask, Registration, TaskState, TaskUpdate};

    fn task_json(id: u32, title: &str, state: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": title,
            "description": "",
            "state": state,
            "created_at": "2024-05-01T09:30:00",
            "updated_at": "2024-05-01T09:30:00",
            "owner_id": 1
        })
    }

    fn client_for(server: &MockServer) -> ApiClient {
        let config = ClientConfig::with_base_url(&format!("{}/api", server.uri()));
        ApiClient::new(&config, Session::in_memory())
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![task_json(1, "Buy milk", "Not Started")]))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.session().acquire("secret-token");
        let tasks = client.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
    }

    #[tokio::test]
    async fn test_no_authorization_header_without_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<serde_json::Value>::new()))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.list_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_is_form_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("username=alice"))
            .and(body_string_contains("password=hunter22"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "access_token": "jwt", "token_type": "bearer" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let token = client.login("alice", "hunter22").await.unwrap();
        assert_eq!(token.access_token, "jwt");
        assert!(!client.session().is_active());
    }

    #[tokio::test]
    async fn test_register_sends_json() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .and(body_json(serde_json::json!({
                "username": "alice",
                "email": "alice@example.com",
                "password": "hunter22"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 1,
                "username": "alice",
                "email": "alice@example.com",
                "created_at": "2024-05-01T09:30:00"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let user = client
            .register(&Registration {
                username: "alice",
                email: "alice@example.com",
                password: "hunter22",
            })
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.id, Some(1));
    }

    #[tokio::test]
    async fn test_backend_detail_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/tasks/4"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({ "detail": "Invalid state transition" })),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .update_task(4, &TaskUpdate::state(TaskState::NotStarted))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Backend { status: 400, detail: Some("Invalid state transition".into()) });
    }

    #[tokio::test]
    async fn test_task_crud_paths() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/tasks"))
            .and(body_json(serde_json::json!({ "title": "Buy milk", "description": "" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(task_json(9, "Buy milk", "Not Started")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/tasks/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(task_json(9, "Buy milk", "Not Started")))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/tasks/9"))
            .and(body_json(serde_json::json!({ "state": "In Progress" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(task_json(9, "Buy milk", "In Progress")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/tasks/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let created = client
            .create_task(&NewTask { title: "Buy milk".into(), description: String::new() })
            .await
            .unwrap();
        assert_eq!(created.id, 9);

        let fetched = client.get_task(9).await.unwrap();
        assert_eq!(fetched.state, TaskState::NotStarted);

        let updated = client.update_task(9, &TaskUpdate::state(TaskState::InProgress)).await.unwrap();
        assert_eq!(updated.state, TaskState::InProgress);

        client.delete_task(9).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_by_state_sends_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tasks"))
            .and(query_param("state", "In Progress"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![task_json(2, "Write report", "In Progress")]))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let tasks = client.list_tasks_by_state(TaskState::InProgress).await.unwrap();
        assert_eq!(tasks[0].state, TaskState::InProgress);
    }

    #[tokio::test]
    async fn test_send_command() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/ai/command"))
            .and(body_json(serde_json::json!({ "command": "complete buy milk" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Done",
                "action": "UPDATE_STATE",
                "data": { "task_id": 9, "title": "Buy milk", "state": "Completed" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let reply = client.send_command("complete buy milk").await.unwrap();
        assert!(reply.success);
        assert!(reply.requires_reload());
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(matches!(client.current_user().await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9/api");
        let client = ApiClient::new(&config, Session::in_memory());
        assert!(matches!(client.list_tasks().await, Err(ApiError::Transport(_))));
    }
}
