// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::time::Duration;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}

// --- State directory ---

/// Resolve state directory: OC_STATE_DIR > XDG_STATE_HOME/oc > ~/.local/state/oc
pub fn state_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("OC_STATE_DIR") {
        return Some(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Some(PathBuf::from(xdg).join("oc"));
    }
    dirs::home_dir().map(|home| home.join(".local/state/oc"))
}

// --- Configuration file ---

/// Resolve config path: OC_CONFIG > XDG_CONFIG_HOME/oc > ~/.config/oc
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("OC_CONFIG") {
        return Some(PathBuf::from(path));
    }
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("oc/config.toml"));
    }
    dirs::home_dir().map(|home| home.join(".config/oc/config.toml"))
}

// --- Logging ---

/// Log filter directive: OC_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    std::env::var("OC_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|s| !s.is_empty())
}

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

// --- Timeouts ---

pub fn top_interval_ms() -> Option<Duration> {
    parse_duration_ms("OC_TOP_INTERVAL_MS")
}
