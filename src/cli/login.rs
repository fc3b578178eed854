//! tasknest login command implementation

use serde::Serialize;

use crate::api::TaskApi;
use crate::client::TaskListClient;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

#[derive(Serialize)]
struct LoginReport {
    email: String,
    tasks: usize,
}

pub async fn run<A: TaskApi>(
    client: &mut TaskListClient<A>,
    email: &str,
    password: &str,
    options: OutputOptions,
) -> Result<()> {
    client.login(email, password).await?;

    let report = LoginReport {
        email: email.to_string(),
        tasks: client.tasks().len(),
    };

    let mut human = HumanOutput::new("tasknest login: signed in");
    human.push_summary("email", email);
    human.push_summary("tasks", report.tasks.to_string());
    human.push_next_step("tasknest task list");
    human.push_next_step("tasknest task add <title> --category today");

    emit_success(options, "login", &report, Some(&human))?;
    Ok(())
}
