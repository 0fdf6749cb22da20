// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-console `help`, generated from the grammar table.
//!
//! Families are grouped under their section heading in table order, so the
//! help text always lists every statement the resolver accepts.

use crate::color::HelpPrinter;
use crate::error::ConsoleError;
use crate::grammar::{grammars_for, Grammar, GRAMMARS};

const FOOTER: &str = "Statements end with ';'. Type 'help <keyword>' for one family.";

/// Full help, or the families `keyword` belongs to.
pub fn render(keyword: Option<&str>, colorize: bool) -> Result<String, ConsoleError> {
    let grammars: Vec<&Grammar> = match keyword {
        None => GRAMMARS.iter().collect(),
        Some(keyword) => {
            let found = grammars_for(keyword);
            if found.is_empty() {
                return Err(ConsoleError::domain(format!(
                    "no help for '{keyword}', type 'help' for all statements"
                )));
            }
            found
        }
    };

    let mut printer = HelpPrinter::with_color(colorize);
    for (i, section) in sections(&grammars).into_iter().enumerate() {
        if i > 0 {
            printer.blank();
        }
        printer.header(&format!("{section}:"));
        for grammar in grammars.iter().filter(|g| g.section == section) {
            for usage in grammar.usage {
                printer.usage(usage);
            }
        }
    }
    if keyword.is_none() {
        printer.blank();
        printer.hint(FOOTER);
    }
    Ok(printer.finish())
}

/// Section names in first-appearance order.
fn sections(grammars: &[&Grammar]) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for grammar in grammars {
        if !seen.contains(&grammar.section) {
            seen.push(grammar.section);
        }
    }
    seen
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
