//! tasknest task command implementations.
//!
//! The library treats a missing session or blank title as a silent no-op;
//! at the CLI boundary those outcomes become user-visible errors so a
//! command never exits 0 without doing anything.

use serde::Serialize;

use crate::api::TaskApi;
use crate::client::{AddOutcome, DeleteOutcome, RefreshOutcome, TaskListClient};
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Category, Task};

#[derive(Serialize)]
struct AddReport {
    task: Task,
}

#[derive(Serialize)]
struct ListReport {
    tasks: Vec<Task>,
    total: usize,
}

#[derive(Serialize)]
struct RmReport {
    id: String,
}

pub async fn add<A: TaskApi>(
    client: &mut TaskListClient<A>,
    title: &str,
    category: Category,
    options: OutputOptions,
) -> Result<()> {
    let task = match client.add_task(title, category).await? {
        AddOutcome::Added(task) => task,
        AddOutcome::EmptyTitle => {
            return Err(Error::InvalidArgument("title cannot be empty".to_string()))
        }
        AddOutcome::NoSession => return Err(Error::MissingSession),
    };

    let mut human = HumanOutput::new("tasknest task add: created");
    human.push_summary("id", task.id.clone());
    human.push_summary("title", task.title.clone());
    human.push_summary("category", task.category.to_string());
    human.push_next_step("tasknest task list");

    emit_success(options, "task add", &AddReport { task }, Some(&human))?;
    Ok(())
}

pub async fn list<A: TaskApi>(
    client: &mut TaskListClient<A>,
    category: Option<Category>,
    options: OutputOptions,
) -> Result<()> {
    match client.refresh().await? {
        RefreshOutcome::Refreshed(_) => {}
        RefreshOutcome::NoSession => return Err(Error::MissingSession),
    }

    let total = client.tasks().len();
    let tasks: Vec<Task> = client
        .tasks()
        .iter()
        .filter(|task| category.map_or(true, |wanted| task.category == wanted))
        .cloned()
        .collect();

    let header = match category {
        Some(category) => format!(
            "tasknest task list: {} of {} task(s) in {}",
            tasks.len(),
            total,
            category
        ),
        None => format!("tasknest task list: {total} task(s)"),
    };

    let mut human = HumanOutput::new(header);
    for task in &tasks {
        human.push_detail(format!("{}  {}  [{}]", task.id, task.title, task.category));
    }
    if tasks.is_empty() {
        human.push_next_step("tasknest task add <title> --category today");
    }

    emit_success(options, "task list", &ListReport { tasks, total }, Some(&human))?;
    Ok(())
}

pub async fn rm<A: TaskApi>(
    client: &mut TaskListClient<A>,
    id: &str,
    options: OutputOptions,
) -> Result<()> {
    // Fetch first so the local mirror reflects server state before the
    // confirmed removal, as a login-then-fetch flow would.
    match client.refresh().await? {
        RefreshOutcome::Refreshed(_) => {}
        RefreshOutcome::NoSession => return Err(Error::MissingSession),
    }

    match client.delete_task(id).await? {
        DeleteOutcome::Deleted => {}
        DeleteOutcome::NoSession => return Err(Error::MissingSession),
    }

    let mut human = HumanOutput::new("tasknest task rm: deleted");
    human.push_summary("id", id);
    human.push_summary("remaining", client.tasks().len().to_string());

    emit_success(options, "task rm", &RmReport { id: id.to_string() }, Some(&human))?;
    Ok(())
}
