// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Server error codes worth retrying through the idempotent resubmission path.
pub const TRANSIENT_SERVER_CODES: [&str; 4] = [
    "ServiceUnavailable",
    "InternalServerError",
    "GatewayTimeout",
    "RequestTimeout",
];

/// Failure reported by a remote call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Connection dropped, reset or timed out before a response arrived
    #[error("network error: {0}")]
    Io(String),

    #[error("{code}: {message}")]
    Server {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// No usable connection to the service
    #[error("remote service unavailable: {0}")]
    Unavailable(String),
}

impl RemoteError {
    pub fn server(code: impl Into<String>, message: impl Into<String>) -> Self {
        RemoteError::Server {
            code: code.into(),
            message: message.into(),
            request_id: None,
        }
    }

    pub fn with_request_id(self, id: impl Into<String>) -> Self {
        match self {
            RemoteError::Server { code, message, .. } => RemoteError::Server {
                code,
                message,
                request_id: Some(id.into()),
            },
            other => other,
        }
    }

    /// I/O failures and allow-listed server codes.
    pub fn is_transient(&self) -> bool {
        match self {
            RemoteError::Io(_) => true,
            RemoteError::Server { code, .. } => TRANSIENT_SERVER_CODES.contains(&code.as_str()),
            RemoteError::Unavailable(_) => false,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        match self {
            RemoteError::Server { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
