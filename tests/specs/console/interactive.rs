// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-eval loop specs, driven through a pipe

use crate::prelude::*;

#[test]
fn statements_span_lines_until_semicolon() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1"])
        .stdin("use\nquota\nq_multi\n;\n")
        .passes()
        .stdout_eq("")
        .stderr_has("Quota q_multi is used for subsequent jobs");
}

#[test]
fn end_of_input_exits_cleanly() {
    let home = Home::empty();
    home.oc().stdin("").passes().stdout_eq("");
}

#[test]
fn failure_is_reported_and_loop_continues() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1"])
        .stdin("frobnicate;\nuse quota q2;\n")
        .passes()
        .stderr_has("unrecognized statement")
        .stderr_has("Quota q2 is used for subsequent jobs");
}

#[test]
fn bare_quit_ends_the_loop() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1"])
        .stdin("quit\nuse quota never;\n")
        .passes()
        .stderr_lacks("never");
}

#[test]
fn no_prompt_without_a_terminal() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1"])
        .stdin("whoami;\n")
        .passes()
        .stdout_has("Project:")
        .stdout_lacks("p1> ");
}

#[test]
fn session_log_is_written_to_state_dir() {
    let home = Home::empty();
    home.oc()
        .args(&["--project", "p1"])
        .env("OC_LOG", "debug")
        .stdin("set a=1;\n")
        .passes();
    assert!(home.log().contains("console starting"), "log: {}", home.log());
}
