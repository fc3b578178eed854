//! Remote API backend.
//!
//! Endpoints (base address configurable):
//! - `POST /login`        body `{email, password}` -> `{token}`
//! - `GET /tasks`         `Authorization: Bearer <token>` -> `[Task...]`
//! - `POST /tasks`        bearer + body `{title, category}` -> `Task`
//! - `DELETE /tasks/{id}` bearer -> 200/204
//!
//! The trait seam exists so the synchronization client can be exercised
//! against an in-memory backend in tests; `HttpApi` is the production
//! implementation. No retries, no backoff, and no timeout unless one is
//! configured.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::session::Session;
use crate::task::{Task, TaskDraft};

const ERROR_BODY_EXCERPT_LEN: usize = 200;

/// Backend contract for the task service.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Exchange credentials for a session token.
    async fn login(&self, email: &str, password: &str) -> Result<Session>;

    /// Fetch the full task list, in server order.
    async fn list_tasks(&self, session: &Session) -> Result<Vec<Task>>;

    /// Create a task; the server assigns the id.
    async fn create_task(&self, session: &Session, draft: &TaskDraft) -> Result<Task>;

    /// Delete a task by id.
    async fn delete_task(&self, session: &Session, id: &str) -> Result<()>;
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

/// HTTP implementation of [`TaskApi`] over `reqwest`.
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    /// Build a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TaskApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let resp = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        // Any HTTP-level rejection of credentials reads as invalid
        // credentials; transport failures keep their own variant.
        if !resp.status().is_success() {
            return Err(Error::InvalidCredentials);
        }

        let body: LoginResponse = resp.json().await?;
        Session::new(body.token)
    }

    async fn list_tasks(&self, session: &Session) -> Result<Vec<Task>> {
        let resp = self
            .client
            .get(self.url("/tasks"))
            .bearer_auth(session.token())
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let tasks: Vec<Task> = resp.json().await?;
        Ok(tasks)
    }

    async fn create_task(&self, session: &Session, draft: &TaskDraft) -> Result<Task> {
        let resp = self
            .client
            .post(self.url("/tasks"))
            .bearer_auth(session.token())
            .json(draft)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let task: Task = resp.json().await?;
        Ok(task)
    }

    async fn delete_task(&self, session: &Session, id: &str) -> Result<()> {
        let resp = self
            .client
            .delete(self.url(&format!("/tasks/{id}")))
            .bearer_auth(session.token())
            .send()
            .await?;

        check_status(resp).await?;
        Ok(())
    }
}

/// Map a non-2xx task-endpoint response to `Error::Api`, carrying a short
/// excerpt of the body for diagnostics.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp
        .text()
        .await
        .ok()
        .map(|body| excerpt(&body))
        .filter(|body| !body.is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= ERROR_BODY_EXCERPT_LEN {
        return trimmed.to_string();
    }
    let mut cut = ERROR_BODY_EXCERPT_LEN;
    while !trimmed.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &trimmed[..cut])
}
