// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read-eval loop.
//!
//! Lines accumulate until an unquoted `;`. Each complete statement is
//! resolved against the session as it stands when its turn comes, so `use`
//! earlier on a line affects the statements after it. Ctrl+C at the prompt
//! discards the partial statement; end of input leaves the loop.

use crate::context::{Backends, Console};
use crate::error::{format_error, is_interrupted, ConsoleError, ResolveError};
use crate::exec::Flow;
use crate::grammar::resolve_statement;
use oc_adapters::LineReader;
use oc_grammar::{split_statements, StatementBuffer};
use std::io::{IsTerminal, Write};

/// Words that leave the loop even without a terminating `;`.
const BARE_QUIT: [&str; 3] = ["quit", "exit", "q"];

pub async fn run<B: Backends>(console: &mut Console<B>, input: &LineReader) -> anyhow::Result<()> {
    let show_prompt = std::io::stdin().is_terminal();
    let mut buffer = StatementBuffer::new();

    loop {
        if show_prompt {
            print_prompt(console.session.project(), buffer.is_empty());
        }
        let line = tokio::select! {
            line = input.next_line() => line?,
            _ = console.interrupt().wait() => {
                console.interrupt().clear();
                buffer.clear();
                println!();
                continue;
            }
        };
        let Some(line) = line else {
            if show_prompt {
                println!();
            }
            return Ok(());
        };

        if buffer.is_empty() && is_bare_quit(&line) {
            return Ok(());
        }
        buffer.push_line(&line);
        let Some(text) = buffer.take_complete() else {
            continue;
        };
        if run_text(console, &text).await == Flow::Quit {
            return Ok(());
        }
    }
}

fn is_bare_quit(line: &str) -> bool {
    let word = line.trim();
    BARE_QUIT.iter().any(|q| q.eq_ignore_ascii_case(word))
}

/// `<project>> ` for a new statement, an aligned `> ` for continuations.
fn prompt(project: Option<&str>, fresh: bool) -> String {
    let label = project.unwrap_or("oc");
    if fresh {
        format!("{label}> ")
    } else {
        format!("{}> ", " ".repeat(label.chars().count()))
    }
}

fn print_prompt(project: Option<&str>, fresh: bool) {
    let mut out = std::io::stdout().lock();
    let _ = write!(out, "{}", prompt(project, fresh));
    let _ = out.flush();
}

/// Run the statements of one complete input; the first failure skips the rest.
async fn run_text<B: Backends>(console: &mut Console<B>, text: &str) -> Flow {
    let statements = match split_statements(text) {
        Ok(statements) => statements,
        Err(err) => {
            let err = ResolveError::Syntax {
                family: "statement",
                message: err.to_string(),
            };
            report(console, &ConsoleError::from(err).into());
            return Flow::Continue;
        }
    };
    for statement in statements {
        let result = match resolve_statement(statement, &console.session) {
            Ok(command) => console.execute(&command).await,
            Err(err) => Err(ConsoleError::from(err).into()),
        };
        match result {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Flow::Quit,
            Err(err) => {
                report(console, &err);
                break;
            }
        }
    }
    Flow::Continue
}

fn report<B: Backends>(console: &Console<B>, err: &anyhow::Error) {
    if is_interrupted(err) {
        console.interrupt().clear();
        return;
    }
    tracing::debug!(error = %err, "statement failed");
    eprintln!("Error: {}", format_error(err));
}

#[cfg(test)]
#[path = "interactive_tests.rs"]
mod tests;
