// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

#[yare::parameterized(
    collapses_whitespace = { "  desc\n\t shard   t ", "desc shard t" },
    strips_terminator    = { "whoami;", "whoami" },
    strips_many          = { "whoami ; ;", "whoami" },
    keeps_quoted_spaces  = { "select  'a   b'", "select 'a   b'" },
    strips_line_comment  = { "select 1 -- trailing\nfrom t", "select 1 from t" },
    quoted_dashes_kept   = { "select '--x'", "select '--x'" },
    only_comment         = { "-- nothing here", "" },
    strips_block_comment = { "select 1 /* c */ from t", "select 1 from t" },
    block_separates      = { "select/*x*/1", "select 1" },
    multiline_block      = { "desc /* a\n b */ t", "desc t" },
    quoted_block_kept    = { "select '/* x */'", "select '/* x */'" },
    unclosed_block       = { "whoami /* never closed", "whoami" },
)]
fn normalizes(raw: &str, expected: &str) {
    assert_eq!(normalize(raw), expected);
}

#[test]
fn splits_on_unquoted_semicolons() {
    let statements = split_statements("use p1; select ';' from t;\n whoami").unwrap();
    let normalized: Vec<_> = statements.iter().map(|s| s.normalized.as_str()).collect();
    assert_eq!(normalized, vec!["use p1", "select ';' from t", "whoami"]);
}

#[test]
fn split_ignores_semicolons_in_comments() {
    let statements = split_statements("select 1 -- a; b\n; whoami").unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0].normalized, "select 1");
}

#[test]
fn split_ignores_semicolons_in_block_comments() {
    let statements = split_statements("select 1 /* a; b */; whoami").unwrap();
    let normalized: Vec<_> = statements.iter().map(|s| s.normalized.as_str()).collect();
    assert_eq!(normalized, vec!["select 1", "whoami"]);
}

#[test]
fn quote_inside_block_comment_is_not_unterminated() {
    assert!(split_statements("select 1 /* don't */;").is_ok());
}

#[test]
fn split_drops_empty_statements() {
    assert!(split_statements(" ; ;\n").unwrap().is_empty());
}

#[test]
fn split_keeps_raw_text() {
    let statements = split_statements("desc   t ;").unwrap();
    assert_eq!(statements[0].raw, "desc   t");
}

#[test]
fn split_rejects_unterminated_quote() {
    assert!(matches!(
        split_statements("select 'a; whoami"),
        Err(LexerError::UnterminatedQuote { quote: '\'', .. })
    ));
}

#[test]
fn buffer_waits_for_terminator() {
    let mut buffer = StatementBuffer::new();
    buffer.push_line("select *");
    assert_eq!(buffer.take_complete(), None);
    buffer.push_line("from t;  ");
    assert_eq!(buffer.take_complete().as_deref(), Some("select *\nfrom t;  "));
    assert!(buffer.is_empty());
}

#[test]
fn buffer_ignores_quoted_and_commented_terminators() {
    let mut buffer = StatementBuffer::new();
    buffer.push_line("select 'a;");
    assert!(!buffer.is_complete());
    buffer.push_line("' -- done;");
    assert!(!buffer.is_complete());
    buffer.push_line(";");
    assert!(buffer.is_complete());
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in "[a-z ;'\\-\n]{0,40}") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
