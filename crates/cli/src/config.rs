// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `config.toml` loading.
//!
//! ```toml
//! endpoint = "https://service.example.com/api"
//! project = "analytics"
//! retry_count = 2
//! logview_template = "{endpoint}/logview?id={id}"
//!
//! [credentials]
//! access_id = "..."
//! access_key = "..."
//!
//! [hooks]
//! drop_resource = "audit"
//!
//! [settings]
//! "odps.sql.type.system.odps2" = "true"
//!
//! [wait]
//! poll_ms = 1000
//!
//! [retry]
//! backoff_ms = 3000
//! window_secs = 600
//! ```

use indexmap::IndexMap;
use oc_core::{Credentials, SessionContext};
use oc_engine::RunnerConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub endpoint: Option<String>,
    pub project: Option<String>,
    pub schema: Option<String>,
    pub credentials: Option<CredentialsConfig>,
    pub retry_count: Option<u32>,
    pub logview_template: Option<String>,
    /// Family name -> before-hook name
    pub hooks: IndexMap<String, String>,
    /// Initial `set` entries
    pub settings: IndexMap<String, String>,
    pub wait: WaitConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialsConfig {
    pub access_id: String,
    pub access_key: String,
    #[serde(default)]
    pub sts_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaitConfig {
    pub poll_ms: Option<u64>,
    /// Refresh interval of `top instance -d`
    pub top_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryConfig {
    pub backoff_ms: Option<u64>,
    pub window_secs: Option<u64>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load `explicit` (which must exist), else the discovered default path if
    /// present, else an empty config.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match crate::env::config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Timing knobs: defaults, then this file, then environment variables.
    pub fn runner_config(&self) -> RunnerConfig {
        let mut config = RunnerConfig::default();
        if let Some(ms) = self.wait.poll_ms {
            config.poll_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.retry.backoff_ms {
            config.retry_backoff = Duration::from_millis(ms);
        }
        if let Some(secs) = self.retry.window_secs {
            config.retry_window = Duration::from_secs(secs);
        }
        config.with_env_overrides()
    }

    pub fn top_interval(&self) -> Duration {
        crate::env::top_interval_ms()
            .or(self.wait.top_interval_ms.map(Duration::from_millis))
            .unwrap_or(Duration::from_secs(3))
    }

    /// Seed a fresh session from this file.
    ///
    /// Settings that fail validation are skipped with a warning in the log.
    pub fn apply_to(&self, session: &mut SessionContext) {
        session.endpoint = self.endpoint.clone();
        session.init_project(self.project.clone());
        session.set_schema(self.schema.clone());
        if let Some(creds) = &self.credentials {
            session.credentials = Some(Credentials {
                access_id: creds.access_id.clone(),
                access_key: creds.access_key.clone(),
                sts_token: creds.sts_token.clone(),
            });
        }
        if let Some(count) = self.retry_count {
            session.retry_count = count.max(1);
        }
        for (family, hook) in &self.hooks {
            session.hooks.set(family.as_str(), hook.as_str());
        }
        for (key, value) in &self.settings {
            if let Err(e) = session.apply_setting(key, value) {
                tracing::warn!(key, error = %e, "ignoring config setting");
            }
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
