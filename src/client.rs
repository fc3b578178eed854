//! Task list synchronization client.
//!
//! `TaskListClient` keeps an in-memory ordered mirror of the server's task
//! list, mediated by the persisted session. Synchronization strategy:
//! server-confirmed incremental updates — a successful create appends the
//! confirmed task at the tail, a successful delete removes the confirmed
//! id, and `refresh` replaces the whole list (last-fetch-wins). Nothing is
//! mutated locally before the server confirms, and no reconciliation runs
//! if server state diverges.
//!
//! Precondition misses (no stored session, blank title) are reported as
//! typed outcomes rather than errors: the operation no-ops, issues no
//! request, and leaves local state unchanged. Surfacing them to a user is
//! the caller's concern.

use tracing::{debug, warn};

use crate::api::TaskApi;
use crate::error::Result;
use crate::session::{Session, SessionStore};
use crate::task::{Category, Task, TaskDraft};

/// Outcome of a refresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Local list replaced with the server's; carries the new length.
    Refreshed(usize),
    /// No stored session; nothing was fetched.
    NoSession,
}

/// Outcome of an add attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Server confirmed the create; the task was appended locally.
    Added(Task),
    /// Title was blank after trimming; no request issued.
    EmptyTitle,
    /// No stored session; no request issued.
    NoSession,
}

/// Outcome of a delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Server confirmed the delete; the local entry was removed.
    Deleted,
    /// No stored session; no request issued.
    NoSession,
}

/// In-memory task list synchronized with the remote store.
pub struct TaskListClient<A: TaskApi> {
    api: A,
    store: SessionStore,
    tasks: Vec<Task>,
}

impl<A: TaskApi> TaskListClient<A> {
    pub fn new(api: A, store: SessionStore) -> Self {
        Self {
            api,
            store,
            tasks: Vec::new(),
        }
    }

    /// The current local task sequence, in server order with confirmed
    /// local updates applied.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Whether a session is currently stored.
    pub fn has_session(&self) -> Result<bool> {
        Ok(self.store.load()?.is_some())
    }

    /// Exchange credentials for a session, persist it, and refresh.
    ///
    /// On failure any previously stored session is left untouched. A
    /// refresh failure after a successful login is logged and swallowed;
    /// the login itself stands.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let session = self.api.login(email, password).await?;
        self.store.save(&session)?;

        if let Err(err) = self.refresh().await {
            warn!("task refresh after login failed: {err}");
        }
        Ok(())
    }

    /// Clear the stored session and the local list.
    ///
    /// Returns whether a session existed.
    pub fn logout(&mut self) -> Result<bool> {
        let existed = self.store.clear()?;
        self.tasks.clear();
        Ok(existed)
    }

    /// Replace the local list with the server's (last-fetch-wins).
    pub async fn refresh(&mut self) -> Result<RefreshOutcome> {
        let session = match self.current_session()? {
            Some(session) => session,
            None => return Ok(RefreshOutcome::NoSession),
        };

        let tasks = self.api.list_tasks(&session).await?;
        self.tasks = tasks;
        Ok(RefreshOutcome::Refreshed(self.tasks.len()))
    }

    /// Create a task and append the server-confirmed record at the tail.
    ///
    /// The session is checked before the title, and neither precondition
    /// miss issues a request. New tasks land at the tail regardless of
    /// category; grouping by category is a rendering concern.
    pub async fn add_task(&mut self, title: &str, category: Category) -> Result<AddOutcome> {
        let session = match self.current_session()? {
            Some(session) => session,
            None => return Ok(AddOutcome::NoSession),
        };

        let draft = match TaskDraft::new(title, category) {
            Some(draft) => draft,
            None => {
                debug!("skipping add: blank title");
                return Ok(AddOutcome::EmptyTitle);
            }
        };

        let task = self.api.create_task(&session, &draft).await?;
        self.tasks.push(task.clone());
        Ok(AddOutcome::Added(task))
    }

    /// Delete a task by id, removing the local entry only after the server
    /// confirms. A failed call leaves the local sequence unchanged.
    pub async fn delete_task(&mut self, id: &str) -> Result<DeleteOutcome> {
        let session = match self.current_session()? {
            Some(session) => session,
            None => return Ok(DeleteOutcome::NoSession),
        };

        self.api.delete_task(&session, id).await?;

        if let Some(pos) = self.tasks.iter().position(|task| task.id == id) {
            self.tasks.remove(pos);
        }
        Ok(DeleteOutcome::Deleted)
    }

    fn current_session(&self) -> Result<Option<Session>> {
        let session = self.store.load()?;
        if session.is_none() {
            debug!("no stored session; skipping request");
        }
        Ok(session)
    }
}
