use mockito::{Matcher, ServerGuard};
use std::process::{Command, Output};

fn run_binary(server: &ServerGuard, trace: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_hartisize"));
    command
        .args(["--project", "library", "--progress=false", "--host"])
        .arg(server.url())
        .env_remove("RUST_LOG");
    match trace {
        Some(value) => command.env("HB_SIZE_TRACE", value),
        None => command.env_remove("HB_SIZE_TRACE"),
    };
    command.output().expect("failed to spawn hartisize")
}

#[test]
fn test_malformed_trace_variable_exits_before_any_request() {
    let mut server = mockito::Server::new();
    let untouched = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let output = run_binary(&server, Some("bogus"));

    untouched.assert();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("HB_SIZE_TRACE"), "stderr: {stderr}");
}

#[test]
fn test_registry_failure_exits_non_zero_without_table() {
    let mut server = mockito::Server::new();
    let failing = server
        .mock("GET", Matcher::Any)
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create();

    let output = run_binary(&server, None);

    failing.assert();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("list repositories"), "stderr: {stderr}");
}

#[test]
fn test_successful_run_prints_report_to_stdout() {
    let mut server = mockito::Server::new();
    let _empty = server
        .mock("GET", "/api/v2.0/projects/library/repositories")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("x-total-count", "0")
        .with_body("[]")
        .create();

    let output = run_binary(&server, Some("false"));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Harbor artifacts size of project - library"));
    assert!(stdout.contains("ArtifactsCount"));
}
