// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job configuration assembly.
//!
//! Layers, lowest precedence first: job-type defaults, session state,
//! statement-local overrides.

use indexmap::IndexMap;
use oc_core::{
    JobConfig, SessionContext, ALIASES_PROPERTY, DEFAULT_SCHEMA_KEY, NAMESPACE_SCHEMA_KEY,
    RUNNING_CLUSTER_KEY, SETTINGS_PROPERTY, TIMEZONE_KEY,
};
use serde_json::{Map, Value};

/// Property carrying the session's quota.
pub const QUOTA_PROPERTY: &str = "odps.task.wlm.quota";

/// Property naming the compute session statements are routed to.
pub const SESSION_PROPERTY: &str = "odps.attached.session";

/// Statement-local values that win over session state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub priority: Option<u32>,
    /// Merged into the `settings` payload
    pub settings: IndexMap<String, String>,
    /// Set directly as job properties
    pub properties: IndexMap<String, String>,
}

impl Overrides {
    pub fn is_empty(&self) -> bool {
        self.priority.is_none() && self.settings.is_empty() && self.properties.is_empty()
    }
}

/// Merge session state and overrides into job-type defaults.
pub fn build_config(defaults: JobConfig, session: &SessionContext, overrides: &Overrides) -> JobConfig {
    let mut config = defaults;
    if config.project.is_none() {
        config.project = session.project().map(String::from);
    }

    let layered = session
        .settings
        .iter()
        .chain(overrides.settings.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    merge_settings(&mut config, layered);

    if !session.aliases.is_empty() {
        if let Ok(json) = serde_json::to_string(session.aliases.as_map()) {
            config.properties.insert(ALIASES_PROPERTY.to_string(), json);
        }
    }

    config.priority = overrides.priority.or(session.priority).or(config.priority);

    let dedicated = [
        (RUNNING_CLUSTER_KEY, session.running_cluster.as_deref()),
        (TIMEZONE_KEY, session.timezone()),
        (DEFAULT_SCHEMA_KEY, session.schema()),
        (QUOTA_PROPERTY, session.quota.as_deref()),
        (SESSION_PROPERTY, session.attached_session()),
        (NAMESPACE_SCHEMA_KEY, session.namespace_schema.then_some("true")),
    ];
    for (key, value) in dedicated {
        if let Some(value) = value {
            config.properties.insert(key.to_string(), value.to_string());
        }
    }

    for (key, value) in &overrides.properties {
        config.properties.insert(key.clone(), value.clone());
    }
    config
}

/// Merge `entries` into the serialized `settings` property.
///
/// An existing payload that does not parse as a JSON object is left as is and
/// none of `entries` are applied.
fn merge_settings<'a>(config: &mut JobConfig, entries: impl Iterator<Item = (&'a str, &'a str)>) {
    let mut entries = entries.peekable();
    if entries.peek().is_none() {
        return;
    }

    let mut payload = match config.property(SETTINGS_PROPERTY) {
        None => Map::new(),
        Some(raw) => match serde_json::from_str::<Map<String, Value>>(raw) {
            Ok(map) => map,
            Err(e) => {
                tracing::debug!(error = %e, "settings payload unparsable, skipping merge");
                return;
            }
        },
    };
    for (key, value) in entries {
        payload.insert(key.to_string(), Value::String(value.to_string()));
    }

    match serde_json::to_string(&payload) {
        Ok(json) => {
            config.properties.insert(SETTINGS_PROPERTY.to_string(), json);
        }
        Err(e) => tracing::debug!(error = %e, "settings payload not serializable"),
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
