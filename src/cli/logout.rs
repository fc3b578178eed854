//! tasknest logout command implementation

use serde::Serialize;

use crate::api::TaskApi;
use crate::client::TaskListClient;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};

#[derive(Serialize)]
struct LogoutReport {
    cleared: bool,
}

pub fn run<A: TaskApi>(client: &mut TaskListClient<A>, options: OutputOptions) -> Result<()> {
    let cleared = client.logout()?;

    let header = if cleared {
        "tasknest logout: session cleared"
    } else {
        "tasknest logout: no active session"
    };

    let mut human = HumanOutput::new(header);
    if cleared {
        human.push_next_step("tasknest login <email> --password <password>");
    }

    emit_success(options, "logout", &LogoutReport { cleared }, Some(&human))?;
    Ok(())
}
