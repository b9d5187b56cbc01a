//! Convergence outcome value objects.
//!
//! [`ConvergenceResult`] is the tagged outcome of one bootstrap run:
//! - [`ConvergenceResult::Success`] - the set was initiated by this run
//! - [`ConvergenceResult::AlreadyInitialized`] - a prior run initiated it;
//!   treated as a success alias, not a failure
//! - [`ConvergenceResult::Failed`] - the run ended without an active set

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a bootstrap run failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// The backend was unreachable before initiation was attempted.
    Connectivity { message: String },
    /// The backend declined initiation with a non-exceptional negative
    /// acknowledgment. The raw response is retained for diagnostics.
    InitializationRejected { response: serde_json::Value },
    /// Any other error raised during initiation.
    Unexpected { message: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Connectivity { message } => {
                write!(f, "backend unreachable: {}", message)
            }
            FailureReason::InitializationRejected { response } => {
                write!(f, "initiation rejected: {}", response)
            }
            FailureReason::Unexpected { message } => {
                write!(f, "unexpected error: {}", message)
            }
        }
    }
}

/// Outcome of one invocation of the bootstrap convergence procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConvergenceResult {
    /// The replica set was initiated by this run.
    Success,
    /// The replica set was already active before this run.
    AlreadyInitialized,
    /// The run ended without an active replica set.
    Failed(FailureReason),
}

impl ConvergenceResult {
    /// Returns `true` when the replica set is active after this run,
    /// whether this run initiated it or a prior one did.
    pub fn is_converged(&self) -> bool {
        matches!(
            self,
            ConvergenceResult::Success | ConvergenceResult::AlreadyInitialized
        )
    }

    /// Failure detail, if any.
    pub fn failure(&self) -> Option<&FailureReason> {
        match self {
            ConvergenceResult::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for ConvergenceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvergenceResult::Success => write!(f, "replica set initiated"),
            ConvergenceResult::AlreadyInitialized => write!(f, "replica set already initialized"),
            ConvergenceResult::Failed(reason) => write!(f, "bootstrap failed: {}", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_initialized_counts_as_converged() {
        assert!(ConvergenceResult::Success.is_converged());
        assert!(ConvergenceResult::AlreadyInitialized.is_converged());
        assert!(
            !ConvergenceResult::Failed(FailureReason::Connectivity {
                message: "timeout".to_string()
            })
            .is_converged()
        );
    }

    #[test]
    fn test_failure_accessor() {
        let rejected = ConvergenceResult::Failed(FailureReason::InitializationRejected {
            response: serde_json::json!({ "ok": 0.0 }),
        });
        assert!(matches!(
            rejected.failure(),
            Some(FailureReason::InitializationRejected { .. })
        ));
        assert!(ConvergenceResult::Success.failure().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ConvergenceResult::AlreadyInitialized.to_string(),
            "replica set already initialized"
        );
    }
}
