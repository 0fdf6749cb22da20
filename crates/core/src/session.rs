// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Session context: the console's process-wide mutable state.
//!
//! Owned by the console and mutated only by the command currently running,
//! so no locking is involved.

use crate::fallback::{parse_bool, FallbackError, FallbackPolicy, FALLBACK_KEY_PREFIX};
use crate::settings::{Aliases, KeyValueMap, Settings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PRIORITY_KEY: &str = "odps.instance.priority";
pub const RUNNING_CLUSTER_KEY: &str = "odps.running.cluster";
pub const TIMEZONE_KEY: &str = "odps.sql.timezone";
pub const DEFAULT_SCHEMA_KEY: &str = "odps.default.schema";
pub const NAMESPACE_SCHEMA_KEY: &str = "odps.namespace.schema";

/// Highest accepted instance priority (0 is most urgent).
pub const MAX_PRIORITY: u32 = 9;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("project not set, run 'use <project>' first")]
    ProjectNotSet,
    #[error("invalid priority '{0}', expected an integer between 0 and {MAX_PRIORITY}")]
    InvalidPriority(String),
    #[error("'{key}' expects true or false, got '{value}'")]
    InvalidBool { key: String, value: String },
    #[error("'{0}' requires a non-empty value")]
    EmptyValue(String),
    #[error(transparent)]
    Fallback(#[from] FallbackError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_id: String,
    #[serde(skip_serializing)]
    pub access_key: String,
    /// Short-lived security token, when the key pair is temporary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sts_token: Option<String>,
}

impl Credentials {
    pub fn is_temporary(&self) -> bool {
        self.sts_token.is_some()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    /// Return after submission without polling
    pub async_mode: bool,
    /// Print job configuration instead of submitting
    pub dry_run: bool,
    /// Prefer JSON output over tables
    pub machine_readable: bool,
    /// Reading statements from a terminal
    pub interactive: bool,
    /// Answer yes to every confirmation prompt
    pub assume_yes: bool,
}

/// Project-level defaults looked up when switching projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDefaults {
    pub timezone: Option<String>,
}

/// What `switch_project` had to undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSwitch {
    pub previous: Option<String>,
    /// Compute session that was detached by the switch
    pub detached_session: Option<String>,
}

/// Where a `set key=value` ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingTarget {
    Priority,
    RunningCluster,
    Timezone,
    Schema,
    NamespaceSchema,
    Fallback,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub endpoint: Option<String>,
    pub credentials: Option<Credentials>,
    project: Option<String>,
    schema: Option<String>,
    /// Attempts per command for permanent remote errors (at least one)
    pub retry_count: u32,
    pub flags: SessionFlags,
    pub priority: Option<u32>,
    pub running_cluster: Option<String>,
    timezone: Option<String>,
    project_timezone: Option<String>,
    pub quota: Option<String>,
    pub namespace_schema: bool,
    pub settings: Settings,
    pub aliases: Aliases,
    /// Family name -> before-hook name
    pub hooks: KeyValueMap,
    pub fallback: FallbackPolicy,
    attached_session: Option<String>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            endpoint: None,
            credentials: None,
            project: None,
            schema: None,
            retry_count: 1,
            flags: SessionFlags::default(),
            priority: None,
            running_cluster: None,
            timezone: None,
            project_timezone: None,
            quota: None,
            namespace_schema: false,
            settings: Settings::new(),
            aliases: Aliases::new(),
            hooks: KeyValueMap::new(),
            fallback: FallbackPolicy::default(),
            attached_session: None,
        }
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn require_project(&self) -> Result<&str, SessionError> {
        self.project.as_deref().ok_or(SessionError::ProjectNotSet)
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn set_schema(&mut self, schema: Option<String>) {
        self.schema = schema;
    }

    /// Access id of the active identity, if any.
    pub fn identity(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.access_id.as_str())
    }

    /// Explicit timezone, else the project default.
    pub fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref().or(self.project_timezone.as_deref())
    }

    pub fn attached_session(&self) -> Option<&str> {
        self.attached_session.as_deref()
    }

    pub fn attach(&mut self, session: impl Into<String>) {
        self.attached_session = Some(session.into());
    }

    pub fn detach(&mut self) -> Option<String> {
        self.attached_session.take()
    }

    /// Set the initial project without the reset semantics of a switch.
    pub fn init_project(&mut self, project: Option<String>) {
        self.project = project;
    }

    /// Replace the active project.
    ///
    /// Settings and aliases are cleared (never merged), timezone falls back to
    /// the new project's default, quota and schema are dropped, and any
    /// attached compute session is detached.
    pub fn switch_project(&mut self, project: &str, defaults: ProjectDefaults) -> ProjectSwitch {
        let previous = self.project.replace(project.to_string());
        self.settings.clear();
        self.aliases.clear();
        self.timezone = None;
        self.project_timezone = defaults.timezone;
        self.quota = None;
        self.schema = None;
        ProjectSwitch {
            previous,
            detached_session: self.attached_session.take(),
        }
    }

    /// Apply a non-security `set key=value`.
    ///
    /// Dedicated keys and the fallback prefix mutate session fields; every
    /// other key is stored verbatim in the settings map.
    pub fn apply_setting(&mut self, key: &str, value: &str) -> Result<SettingTarget, SessionError> {
        if let Some(suffix) = key.strip_prefix(FALLBACK_KEY_PREFIX) {
            self.fallback.apply(suffix, value)?;
            return Ok(SettingTarget::Fallback);
        }
        match key {
            PRIORITY_KEY => {
                let priority = value
                    .parse::<u32>()
                    .ok()
                    .filter(|p| *p <= MAX_PRIORITY)
                    .ok_or_else(|| SessionError::InvalidPriority(value.to_string()))?;
                self.priority = Some(priority);
                Ok(SettingTarget::Priority)
            }
            RUNNING_CLUSTER_KEY => {
                self.running_cluster = non_empty(key, value)?;
                Ok(SettingTarget::RunningCluster)
            }
            TIMEZONE_KEY => {
                self.timezone = non_empty(key, value)?;
                Ok(SettingTarget::Timezone)
            }
            DEFAULT_SCHEMA_KEY => {
                self.schema = non_empty(key, value)?;
                Ok(SettingTarget::Schema)
            }
            NAMESPACE_SCHEMA_KEY => {
                self.namespace_schema = parse_bool(value).ok_or_else(|| SessionError::InvalidBool {
                    key: key.to_string(),
                    value: value.to_string(),
                })?;
                Ok(SettingTarget::NamespaceSchema)
            }
            _ => {
                self.settings.set(key, value);
                Ok(SettingTarget::Generic)
            }
        }
    }

    /// Undo a `set`. Dedicated keys reset to their defaults.
    pub fn unset(&mut self, key: &str) -> bool {
        match key {
            PRIORITY_KEY => self.priority.take().is_some(),
            RUNNING_CLUSTER_KEY => self.running_cluster.take().is_some(),
            TIMEZONE_KEY => self.timezone.take().is_some(),
            DEFAULT_SCHEMA_KEY => self.schema.take().is_some(),
            NAMESPACE_SCHEMA_KEY => std::mem::take(&mut self.namespace_schema),
            _ => self.settings.remove(key).is_some(),
        }
    }
}

fn non_empty(key: &str, value: &str) -> Result<Option<String>, SessionError> {
    if value.is_empty() {
        return Err(SessionError::EmptyValue(key.to_string()));
    }
    Ok(Some(value.to_string()))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
