// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::color::codes;

#[test]
fn full_help_lists_every_usage() {
    let text = render(None, false).unwrap();
    for grammar in GRAMMARS {
        for usage in grammar.usage {
            assert!(text.contains(usage), "missing usage '{usage}' of {}", grammar.family);
        }
    }
}

#[test]
fn sections_follow_table_order() {
    let text = render(None, false).unwrap();
    let order = [
        "Session:",
        "Instances:",
        "Describe:",
        "Listing:",
        "Resources:",
        "Data:",
        "Jobs:",
        "Security:",
        "SQL:",
    ];
    let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    assert!(text.trim_end().ends_with(FOOTER));
}

#[test]
fn keyword_help_only_shows_matching_families() {
    let text = render(Some("kill"), false).unwrap();
    assert!(text.starts_with("Instances:\n"));
    assert!(text.contains("kill"));
    assert!(!text.contains("Session:"));
    assert!(!text.contains(FOOTER));
}

#[test]
fn keyword_spanning_sections() {
    let text = render(Some("drop"), false).unwrap();
    assert!(text.contains("Resources:"));
}

#[test]
fn unknown_keyword_is_error() {
    let err = render(Some("frobnicate"), false).unwrap_err();
    assert!(err.to_string().starts_with("no help for 'frobnicate'"));
}

#[test]
fn colored_help_uses_palette() {
    let text = render(Some("wait"), true).unwrap();
    assert!(text.starts_with(codes::HEADER_START));
    assert!(text.contains(codes::LITERAL_START));
    assert!(text.contains(codes::RESET));
}
