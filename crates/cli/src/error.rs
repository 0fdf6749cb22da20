// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console error types and classification helpers.

use crate::exit_error::ExitError;
use oc_adapters::RemoteError;
use oc_core::SessionError;
use oc_engine::EngineError;
use thiserror::Error;

/// Why a statement could not be turned into a command.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unrecognized statement: {0}")]
    Unrecognized(String),

    /// A family claimed the statement but its arguments are malformed
    #[error("syntax error in {family}: {message}")]
    Syntax {
        family: &'static str,
        message: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// Command failure, wrapped once at the composite boundary
    #[error("{message}")]
    Domain {
        message: String,
        request_id: Option<String>,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("failed after {attempts} attempt(s): {message}")]
    RetriesExhausted {
        attempts: u32,
        message: String,
        request_id: Option<String>,
    },

    /// Ctrl+C; the statement was abandoned
    #[error("interrupted")]
    Interrupted,
}

impl ConsoleError {
    pub fn domain(message: impl Into<String>) -> Self {
        ConsoleError::Domain {
            message: message.into(),
            request_id: None,
        }
    }
}

/// Convert engine errors, surfacing interruption as [`ConsoleError::Interrupted`].
pub fn from_engine(err: EngineError) -> anyhow::Error {
    match err {
        EngineError::Interrupted { .. } => ConsoleError::Interrupted.into(),
        other => other.into(),
    }
}

pub fn is_interrupted(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<ConsoleError>(),
        Some(ConsoleError::Interrupted)
    ) || matches!(
        err.downcast_ref::<EngineError>(),
        Some(EngineError::Interrupted { .. })
    )
}

/// Errors that are already shaped for the user and pass through composites.
pub fn is_structured(err: &anyhow::Error) -> bool {
    err.is::<ConsoleError>() || err.is::<ExitError>() || is_interrupted(err)
}

/// The remote failure behind `err`, if any.
pub fn remote_cause(err: &anyhow::Error) -> Option<&RemoteError> {
    if let Some(remote) = err.downcast_ref::<RemoteError>() {
        return Some(remote);
    }
    err.downcast_ref::<EngineError>().and_then(EngineError::remote)
}

/// Remote failures worth re-running the whole command for.
///
/// A missing backend is not going to appear between attempts. Nor is a
/// command re-run once a job may already exist for it.
pub fn is_retryable(err: &anyhow::Error) -> bool {
    if err
        .downcast_ref::<EngineError>()
        .is_some_and(EngineError::may_duplicate_job)
    {
        return false;
    }
    remote_cause(err).is_some_and(|r| !matches!(r, RemoteError::Unavailable(_)))
}

pub fn request_id(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<ConsoleError>() {
        Some(ConsoleError::Domain { request_id, .. })
        | Some(ConsoleError::RetriesExhausted { request_id, .. }) => return request_id.clone(),
        _ => {}
    }
    remote_cause(err).and_then(|r| r.request_id().map(String::from))
}

/// Wrap an unstructured error exactly once, keeping message and request id.
pub fn wrap_domain(err: anyhow::Error) -> anyhow::Error {
    if is_structured(&err) {
        return err;
    }
    ConsoleError::Domain {
        request_id: request_id(&err),
        message: err.to_string(),
    }
    .into()
}

/// Process exit code for an error that reached the top level.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(exit) = err.downcast_ref::<ExitError>() {
        return exit.code;
    }
    if is_interrupted(err) {
        return 130;
    }
    match err.downcast_ref::<ConsoleError>() {
        Some(ConsoleError::Resolve(_)) => 2,
        _ if err.is::<ResolveError>() => 2,
        _ => 1,
    }
}

/// Render an error for the terminal, dropping a redundant source chain.
///
/// When every source message already appears in the top-level text the
/// chain is skipped; otherwise it is appended like anyhow's Debug output.
pub fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {i}: {cause}"));
    }
    buf
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
