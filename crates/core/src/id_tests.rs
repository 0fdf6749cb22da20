// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::borrow::Borrow;
use std::collections::HashMap;

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct TestId;
}

#[test]
fn define_id_display_and_as_str() {
    let id = TestId::new("20260101abc");
    assert_eq!(id.as_str(), "20260101abc");
    assert_eq!(id.to_string(), "20260101abc");
}

#[test]
fn define_id_compares_with_str() {
    let id: TestId = "job".into();
    assert_eq!(id, *"job");
    assert_eq!(id, "job");
}

#[test]
fn define_id_borrow_allows_map_lookup() {
    let mut map = HashMap::new();
    map.insert(TestId::new("k"), 42);
    assert_eq!(map.get("k"), Some(&42));

    let id = TestId::new("k");
    let borrowed: &str = id.borrow();
    assert_eq!(borrowed, "k");
}

#[test]
fn define_id_serializes_transparently() {
    let id = TestId::new("abc");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
}

#[test]
fn sequential_gen_counts_up() {
    let gen = SequentialIdGen::new("t");
    assert_eq!(gen.next(), "t-1");
    assert_eq!(gen.next(), "t-2");
}

#[test]
fn sequential_gen_clones_share_counter() {
    let gen = SequentialIdGen::default();
    let other = gen.clone();
    assert_eq!(gen.next(), "token-1");
    assert_eq!(other.next(), "token-2");
}

#[test]
fn uuid_gen_produces_distinct_tokens() {
    let gen = UuidIdGen;
    assert_ne!(gen.next(), gen.next());
}
