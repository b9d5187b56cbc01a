//! Backend administrative port
//!
//! Defines the interface to the clustered data store's administrative
//! surface: a liveness probe and the replica-set initiation request.

use async_trait::async_trait;
use replset_domain::ClusterConfig;
use thiserror::Error;

/// Errors that can occur during backend administrative operations
#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// An error raised by the backend in response to a command, with the
    /// server's structured code when the driver exposes one.
    #[error("Command error{}: {message}", .code.map(|c| format!(" (code {})", c)).unwrap_or_default())]
    Command { code: Option<i32>, message: String },

    #[error("Other error: {0}")]
    Other(String),
}

impl AdminError {
    /// Server error code, if the backend supplied one.
    pub fn code(&self) -> Option<i32> {
        match self {
            AdminError::Command { code, .. } => *code,
            _ => None,
        }
    }
}

/// Non-exceptional acknowledgment of an initiation request.
///
/// `ok` mirrors the backend's acknowledgment flag; `response` retains the
/// raw payload for diagnostics when the request was declined.
#[derive(Debug, Clone)]
pub struct InitiateAck {
    pub ok: bool,
    pub response: serde_json::Value,
}

impl InitiateAck {
    pub fn acknowledged(response: serde_json::Value) -> Self {
        Self { ok: true, response }
    }

    pub fn declined(response: serde_json::Value) -> Self {
        Self {
            ok: false,
            response,
        }
    }
}

/// Administrative interface of the clustered data store
///
/// This port defines how the application layer talks to the backend.
/// Implementations (adapters) live in the infrastructure layer; tests use
/// scripted fakes.
#[async_trait]
pub trait BackendAdmin: Send + Sync {
    /// Lightweight liveness probe. Confirms the backend is reachable and
    /// responsive; has no side effect on the backend.
    async fn ping(&self) -> Result<(), AdminError>;

    /// Request initiation of the replica set described by `config`.
    ///
    /// Exactly one initiation request reaches the backend per call. The
    /// backend may acknowledge (`Ok` with the raw payload), decline
    /// non-exceptionally (`Ok` with `ok == false`), or raise
    /// ([`AdminError::Command`] for server-side errors).
    async fn initiate(&self, config: &ClusterConfig) -> Result<InitiateAck, AdminError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_display_with_code() {
        let error = AdminError::Command {
            code: Some(23),
            message: "already initialized".to_string(),
        };
        assert_eq!(error.to_string(), "Command error (code 23): already initialized");
        assert_eq!(error.code(), Some(23));
    }

    #[test]
    fn test_command_error_display_without_code() {
        let error = AdminError::Command {
            code: None,
            message: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "Command error: boom");
        assert_eq!(error.code(), None);
    }

    #[test]
    fn test_connectivity_error_has_no_code() {
        assert_eq!(AdminError::Connectivity("timeout".to_string()).code(), None);
    }
}
