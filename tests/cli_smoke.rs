use assert_cmd::Command;
use predicates::str::contains;

fn tasknest_cmd(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tasknest").expect("binary");
    cmd.env_remove("TASKNEST_CONFIG")
        .env_remove("TASKNEST_API_URL")
        .env_remove("TASKNEST_PASSWORD")
        .env("TASKNEST_DATA_DIR", data_dir);
    cmd
}

#[test]
fn tasknest_help_works() {
    Command::cargo_bin("tasknest")
        .expect("binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("TaskNest client"));
}

#[test]
fn subcommand_help_works() {
    let subcommands = ["login", "logout", "task"];

    for cmd in subcommands {
        Command::cargo_bin("tasknest")
            .expect("binary")
            .arg(cmd)
            .arg("--help")
            .assert()
            .success();
    }
}

#[test]
fn task_list_without_session_exits_with_auth_code() {
    let dir = tempfile::tempdir().expect("tempdir");

    tasknest_cmd(dir.path())
        .args(["task", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(contains("No stored session"));
}

#[test]
fn task_add_without_session_exits_with_auth_code() {
    let dir = tempfile::tempdir().expect("tempdir");

    tasknest_cmd(dir.path())
        .args(["task", "add", "Buy milk"])
        .assert()
        .failure()
        .code(3)
        .stderr(contains("No stored session"));
}

#[test]
fn task_add_with_blank_title_exits_with_user_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    // Seed a stored session so the title check is what fails.
    std::fs::write(
        dir.path().join("session.json"),
        r#"{"token":"tok-1","saved_at":"2026-01-01T00:00:00Z"}"#,
    )
    .expect("write session");

    tasknest_cmd(dir.path())
        .args(["task", "add", "   "])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("title cannot be empty"));
}

#[test]
fn logout_without_session_reports_nothing_to_clear() {
    let dir = tempfile::tempdir().expect("tempdir");

    tasknest_cmd(dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("no active session"));
}

#[test]
fn logout_clears_seeded_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let session_file = dir.path().join("session.json");
    std::fs::write(
        &session_file,
        r#"{"token":"tok-1","saved_at":"2026-01-01T00:00:00Z"}"#,
    )
    .expect("write session");

    tasknest_cmd(dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("session cleared"));

    assert!(!session_file.exists());
}

#[test]
fn invalid_api_url_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    tasknest_cmd(dir.path())
        .args(["--api-url", "not-a-url", "logout"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("base_url"));
}

#[test]
fn json_error_envelope_has_schema_version() {
    let dir = tempfile::tempdir().expect("tempdir");

    tasknest_cmd(dir.path())
        .args(["--json", "task", "list"])
        .assert()
        .failure()
        .code(3)
        .stdout(contains("tasknest.v1"))
        .stdout(contains("\"kind\": \"auth_error\""));
}
