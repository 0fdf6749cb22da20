// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fallback policy toggles.
//!
//! Remote-call code consults these flags to decide whether a failure of a
//! given class may be retried through an alternate execution path (for
//! example, leaving an attached compute session and submitting the statement
//! as a standalone job). Nothing in this crate acts on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reserved settings prefix: `set odps.console.fallback.<flag>=<bool>`.
pub const FALLBACK_KEY_PREFIX: &str = "odps.console.fallback.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FallbackError {
    #[error("unknown fallback flag '{0}'")]
    UnknownFlag(String),
    #[error("fallback flag '{flag}' expects true or false, got '{value}'")]
    InvalidValue { flag: String, value: String },
}

/// One failure class the policy can enable fallback for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackFlag {
    ResourceNotEnough,
    UnsupportedFeature,
    Upgrading,
    QueryTimeout,
    AttachFailed,
    UnknownError,
}

impl FallbackFlag {
    pub const ALL: [FallbackFlag; 6] = [
        FallbackFlag::ResourceNotEnough,
        FallbackFlag::UnsupportedFeature,
        FallbackFlag::Upgrading,
        FallbackFlag::QueryTimeout,
        FallbackFlag::AttachFailed,
        FallbackFlag::UnknownError,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FallbackFlag::ResourceNotEnough => "resource_not_enough",
            FallbackFlag::UnsupportedFeature => "unsupported_feature",
            FallbackFlag::Upgrading => "upgrading",
            FallbackFlag::QueryTimeout => "query_timeout",
            FallbackFlag::AttachFailed => "attach_failed",
            FallbackFlag::UnknownError => "unknown_error",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for FallbackFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Independent boolean toggles, all enabled by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackPolicy {
    pub resource_not_enough: bool,
    pub unsupported_feature: bool,
    pub upgrading: bool,
    pub query_timeout: bool,
    pub attach_failed: bool,
    pub unknown_error: bool,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            resource_not_enough: true,
            unsupported_feature: true,
            upgrading: true,
            query_timeout: true,
            attach_failed: true,
            unknown_error: true,
        }
    }
}

impl FallbackPolicy {
    pub fn get(&self, flag: FallbackFlag) -> bool {
        match flag {
            FallbackFlag::ResourceNotEnough => self.resource_not_enough,
            FallbackFlag::UnsupportedFeature => self.unsupported_feature,
            FallbackFlag::Upgrading => self.upgrading,
            FallbackFlag::QueryTimeout => self.query_timeout,
            FallbackFlag::AttachFailed => self.attach_failed,
            FallbackFlag::UnknownError => self.unknown_error,
        }
    }

    pub fn set(&mut self, flag: FallbackFlag, enabled: bool) {
        let slot = match flag {
            FallbackFlag::ResourceNotEnough => &mut self.resource_not_enough,
            FallbackFlag::UnsupportedFeature => &mut self.unsupported_feature,
            FallbackFlag::Upgrading => &mut self.upgrading,
            FallbackFlag::QueryTimeout => &mut self.query_timeout,
            FallbackFlag::AttachFailed => &mut self.attach_failed,
            FallbackFlag::UnknownError => &mut self.unknown_error,
        };
        *slot = enabled;
    }

    /// Apply `<suffix>=<value>` where suffix follows [`FALLBACK_KEY_PREFIX`].
    ///
    /// The suffix `all` sets every flag at once.
    pub fn apply(&mut self, suffix: &str, value: &str) -> Result<(), FallbackError> {
        let enabled = parse_bool(value).ok_or_else(|| FallbackError::InvalidValue {
            flag: suffix.to_string(),
            value: value.to_string(),
        })?;
        if suffix == "all" {
            for flag in FallbackFlag::ALL {
                self.set(flag, enabled);
            }
            return Ok(());
        }
        let flag =
            FallbackFlag::from_key(suffix).ok_or_else(|| FallbackError::UnknownFlag(suffix.into()))?;
        self.set(flag, enabled);
        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = (FallbackFlag, bool)> + '_ {
        FallbackFlag::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

/// Parse `true`/`false` case-insensitively.
pub fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod tests;
