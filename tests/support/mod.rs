//! Shared test fixtures: an in-memory task service and session-store
//! helpers.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use tasknest::api::TaskApi;
use tasknest::error::{Error, Result};
use tasknest::session::{Session, SessionStore};
use tasknest::task::{Category, Task, TaskDraft};

/// A request the fake service observed, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Login { email: String },
    ListTasks,
    CreateTask { title: String, category: Category },
    DeleteTask { id: String },
}

#[derive(Default)]
struct FakeState {
    calls: Vec<ApiCall>,
    accounts: Vec<Account>,
    tasks: Vec<Task>,
    next_id: u64,
    fail_list: bool,
}

struct Account {
    email: String,
    password: String,
    token: String,
}

/// In-memory stand-in for the remote task service.
///
/// Records every issued call so tests can assert that precondition misses
/// issue no request at all.
#[derive(Clone, Default)]
pub struct FakeApi {
    inner: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.inner.lock().expect("fake state").next_id = 1;
        api
    }

    pub fn with_account(self, email: &str, password: &str, token: &str) -> Self {
        self.inner.lock().expect("fake state").accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            token: token.to_string(),
        });
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        {
            let mut state = self.inner.lock().expect("fake state");
            state.next_id = tasks.len() as u64 + 1;
            state.tasks = tasks;
        }
        self
    }

    /// Make `GET /tasks` fail with a server error.
    pub fn fail_list(self) -> Self {
        self.inner.lock().expect("fake state").fail_list = true;
        self
    }

    /// Replace the server-side task list, as a concurrent writer would.
    pub fn set_server_tasks(&self, tasks: Vec<Task>) {
        self.inner.lock().expect("fake state").tasks = tasks;
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.lock().expect("fake state").calls.clone()
    }

    /// Server-side task list, in order.
    pub fn server_tasks(&self) -> Vec<Task> {
        self.inner.lock().expect("fake state").tasks.clone()
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let mut state = self.inner.lock().expect("fake state");
        state.calls.push(ApiCall::Login {
            email: email.to_string(),
        });

        let token = state
            .accounts
            .iter()
            .find(|account| account.email == email && account.password == password)
            .map(|account| account.token.clone());

        match token {
            Some(token) => Session::new(token),
            None => Err(Error::InvalidCredentials),
        }
    }

    async fn list_tasks(&self, _session: &Session) -> Result<Vec<Task>> {
        let mut state = self.inner.lock().expect("fake state");
        state.calls.push(ApiCall::ListTasks);

        if state.fail_list {
            return Err(Error::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(state.tasks.clone())
    }

    async fn create_task(&self, _session: &Session, draft: &TaskDraft) -> Result<Task> {
        let mut state = self.inner.lock().expect("fake state");
        state.calls.push(ApiCall::CreateTask {
            title: draft.title.clone(),
            category: draft.category,
        });

        let task = Task {
            id: state.next_id.to_string(),
            title: draft.title.clone(),
            category: draft.category,
        };
        state.next_id += 1;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn delete_task(&self, _session: &Session, id: &str) -> Result<()> {
        let mut state = self.inner.lock().expect("fake state");
        state.calls.push(ApiCall::DeleteTask { id: id.to_string() });

        match state.tasks.iter().position(|task| task.id == id) {
            Some(pos) => {
                state.tasks.remove(pos);
                Ok(())
            }
            None => Err(Error::Api {
                status: 404,
                message: "task not found".to_string(),
            }),
        }
    }
}

/// A session store rooted in a fresh temp directory.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_store() -> (TempDir, SessionStore) {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let store = SessionStore::new(dir.path().to_path_buf());
    (dir, store)
}

/// Shorthand for building a task record.
pub fn task(id: &str, title: &str, category: Category) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        category,
    }
}
