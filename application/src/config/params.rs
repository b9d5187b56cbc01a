//! Convergence parameters — probe loop control.
//!
//! [`ConvergenceParams`] groups the static parameters that control the
//! liveness-probe loop in [`ConvergeUseCase`](crate::use_cases::converge::ConvergeUseCase).
//! These are application-layer concerns, not domain policy.
//!
//! The defaults perform a single probe with no retry; the enclosing
//! orchestration layer (e.g. a container restart policy) owns outer retries.
//! Initiation itself is never retried regardless of these settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Liveness-probe loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvergenceParams {
    /// Number of probe attempts before giving up (minimum 1).
    pub probe_attempts: u32,
    /// Delay before the second probe attempt.
    pub probe_backoff: Duration,
    /// Multiplier applied to the delay after each failed attempt.
    pub backoff_multiplier: f64,
}

impl Default for ConvergenceParams {
    fn default() -> Self {
        Self {
            probe_attempts: 1,
            probe_backoff: Duration::from_millis(500),
            backoff_multiplier: 2.0,
        }
    }
}

impl ConvergenceParams {
    // ==================== Builder Methods ====================

    pub fn with_probe_attempts(mut self, attempts: u32) -> Self {
        self.probe_attempts = attempts.max(1);
        self
    }

    pub fn with_probe_backoff(mut self, backoff: Duration) -> Self {
        self.probe_backoff = backoff;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Delay to wait after the given failed attempt (1-based), `None` when
    /// no attempt remains.
    pub fn backoff_after(&self, attempt: u32) -> Option<Duration> {
        if attempt >= self.probe_attempts {
            return None;
        }
        let factor = self.backoff_multiplier.powi(attempt.saturating_sub(1) as i32);
        Some(self.probe_backoff.mul_f64(factor))
    }
}
