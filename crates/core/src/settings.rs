// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Case-sensitive, last-write-wins key/value stores carried by the session.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered key/value map used for session settings and aliases.
///
/// Keys are compared byte-for-byte. Re-setting a key keeps its original
/// position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValueMap(IndexMap<String, String>);

/// Generic `set key=value` entries that flow into job configuration.
pub type Settings = KeyValueMap;

/// `alias key=value` entries attached to submitted jobs.
pub type Aliases = KeyValueMap;

impl KeyValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
