// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashSet;

#[test]
fn families_are_unique() {
    let mut seen = HashSet::new();
    for grammar in GRAMMARS {
        assert!(seen.insert(grammar.family), "duplicate family {}", grammar.family);
    }
    assert_eq!(GRAMMARS.len(), 44);
}

#[test]
fn every_family_documents_usage_and_keywords() {
    for grammar in GRAMMARS {
        assert!(!grammar.usage.is_empty(), "{} has no usage", grammar.family);
        assert!(!grammar.keywords.is_empty(), "{} has no keywords", grammar.family);
    }
}

#[test]
fn generic_fallbacks_come_last() {
    let position = |family: &str| {
        GRAMMARS
            .iter()
            .position(|g| g.family == family)
            .unwrap()
    };
    assert_eq!(position("sql"), GRAMMARS.len() - 1);
    assert!(position("security") < position("sql"));
    assert!(position("desc_partition") < position("desc_table"));
    for family in [
        "desc_shard",
        "desc_serving_table",
        "desc_instance",
        "desc_project",
        "desc_function",
        "desc_resource",
        "desc_schema",
        "desc_offline_model",
    ] {
        assert!(position(family) < position("desc_partition"), "{family}");
    }
    assert!(position("use_quota") < position("use_project"));
    assert!(position("use_schema") < position("use_project"));
}

#[test]
fn help_keyword_lookup_is_case_insensitive() {
    let families: Vec<&str> = grammars_for("KILL").iter().map(|g| g.family).collect();
    assert_eq!(families, vec!["kill"]);
    assert!(grammars_for("nothing-like-this").is_empty());
}

#[test]
fn desc_keyword_finds_every_describe_family() {
    assert_eq!(grammars_for("desc").len(), 10);
}
