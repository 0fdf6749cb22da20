// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line help and statement help specs

use crate::prelude::*;

#[test]
fn oc_help_shows_usage() {
    let home = Home::empty();
    home.oc()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--execute")
        .stdout_has("--dry-run");
}

#[test]
fn oc_version_shows_version() {
    let home = Home::empty();
    home.oc().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn execute_and_file_conflict() {
    let home = Home::empty();
    let script = home.file("s.sql", "show flags;");
    home.oc()
        .args(&["-e", "show flags;", "-f", script.to_str().unwrap()])
        .exits(2);
}

#[test]
fn help_statement_lists_sections() {
    let home = Home::empty();
    home.oc()
        .args(&["-e", "help;"])
        .passes()
        .stdout_has("Session:")
        .stdout_has("Statements end with ';'");
}

#[test]
fn help_for_unknown_keyword_fails() {
    let home = Home::empty();
    home.oc()
        .args(&["-e", "help frobnicate;"])
        .exits(1)
        .stderr_has("no help for 'frobnicate'");
}
