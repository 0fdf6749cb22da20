// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch execution specs (`-e` and `-f`)

use crate::prelude::*;

#[test]
fn show_flags_reports_project_from_command_line() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1", "-e", "show flags;"])
        .passes()
        .stdout_has("Project:")
        .stdout_has("p1")
        .stdout_has("[fallback]");
}

#[test]
fn session_statements_apply_in_order() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1", "-e", "set odps.sql.type.system=hive; show flags;"])
        .passes()
        .stdout_has("[settings]")
        .stdout_has("odps.sql.type.system=hive");
}

#[test]
fn dry_run_prints_job_configuration() {
    let home = Home::empty();
    let run = home
        .oc()
        .args(&["--project", "p1", "--dry-run", "-e", "select 1;"])
        .passes();
    let config = run.stdout_json();
    assert_eq!(config["statement"], "select 1;");
    assert_eq!(config["project"], "p1");
}

#[test]
fn script_file_runs_every_statement() {
    let home = Home::empty();
    let script = home.file("s.sql", "alias d=20240101;\nuse quota q_batch;\nshow flags;\n");
    home.oc()
        .args(&["--project", "p1", "-f", script.to_str().unwrap()])
        .passes()
        .stderr_has("Quota q_batch is used for subsequent jobs")
        .stdout_has("[aliases]")
        .stdout_has("d=20240101");
}

#[test]
fn use_project_needs_a_reachable_service() {
    let home = Home::empty();
    home.oc()
        .args(&["-e", "use p2;"])
        .exits(1)
        .stderr_has("remote service unavailable");
}

#[test]
fn config_file_seeds_the_session() {
    let home = Home::empty();
    home.config(
        r#"
project = "cfg_project"
retry_count = 2

[settings]
"odps.sql.type.system" = "hive"
"#,
    );
    home.oc()
        .args(&["-M", "-e", "show flags;"])
        .passes()
        .stdout_has("\"cfg_project\"")
        .stdout_has("odps.sql.type.system");
}

#[test]
fn command_line_project_overrides_config() {
    let home = Home::empty();
    home.config("project = \"cfg_project\"\n");
    let run = home
        .oc()
        .args(&["--project", "cli_project", "-M", "-e", "show flags;"])
        .passes();
    assert_eq!(run.stdout_json()["project"], "cli_project");
}

#[test]
fn malformed_config_fails() {
    let home = Home::empty();
    home.config("project = [");
    home.oc().args(&["-e", "show flags;"]).exits(1);
}

#[test]
fn missing_script_file_fails() {
    let home = Home::empty();
    home.oc()
        .args(&["-f", "/nonexistent/script.sql"])
        .exits(1)
        .stderr_has("failed to read script");
}

#[test]
fn unrecognized_statement_exits_two() {
    let home = Home::empty();
    home.oc()
        .args(&["-e", "frobnicate now;"])
        .exits(2)
        .stderr_has("unrecognized statement");
}

#[test]
fn unrecognized_statement_runs_nothing() {
    let home = Home::empty();
    home.oc()
        .args(&["-e", "show flags; frobnicate now;"])
        .exits(2)
        .stdout_lacks("[fallback]");
}

#[test]
fn job_without_project_exits_one() {
    let home = Home::empty();
    home.oc()
        .args(&["-e", "select 1;"])
        .exits(1)
        .stderr_has("project not set");
}

#[test]
fn offline_backend_reports_unavailable() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1", "-e", "desc t;"])
        .exits(1)
        .stderr_has("remote service unavailable");
}

#[test]
fn machine_readable_flags_are_json() {
    let home = Home::empty();
    let run = home
        .oc()
        .args(&["--project", "p1", "-M", "--retry", "3", "-e", "show flags;"])
        .passes();
    let flags = run.stdout_json();
    assert_eq!(flags["project"], "p1");
    assert_eq!(flags["retry_count"], 3);
    assert_eq!(flags["machine_readable"], true);
}
