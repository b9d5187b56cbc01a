//! Bootstrap convergence use case.
//!
//! Idempotently converges a clustered data store to a "replica set active"
//! state. Safe to invoke on every process start: an already-initialized set
//! is recognized and reported as a benign outcome rather than a failure.
//!
//! The procedure is single-shot and run-to-completion:
//! 1. Probe the backend (optionally with bounded retry and backoff).
//! 2. Send exactly one initiation request.
//! 3. Classify the response into a [`ConvergenceResult`].
//!
//! All failures are absorbed into the result; `execute` never returns an
//! error. The liveness probe always completes before initiation is
//! attempted, and a failed probe means initiation is never sent.

use crate::config::ConvergenceParams;
use crate::ports::backend_admin::{AdminError, BackendAdmin};
use crate::ports::bootstrap_logger::{BootstrapEvent, BootstrapLogger, NoBootstrapLogger};
use replset_domain::{ClusterConfig, ConvergenceResult, FailureReason, is_already_initialized};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the [`ConvergeUseCase`].
#[derive(Debug, Clone)]
pub struct ConvergeInput {
    /// Validated replica-set configuration.
    pub config: ClusterConfig,
    /// Probe loop control.
    pub params: ConvergenceParams,
}

impl ConvergeInput {
    pub fn new(config: ClusterConfig) -> Self {
        Self {
            config,
            params: ConvergenceParams::default(),
        }
    }

    pub fn with_params(mut self, params: ConvergenceParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for running one bootstrap convergence pass.
pub struct ConvergeUseCase {
    backend: Arc<dyn BackendAdmin>,
    logger: Arc<dyn BootstrapLogger>,
}

impl ConvergeUseCase {
    pub fn new(backend: Arc<dyn BackendAdmin>) -> Self {
        Self {
            backend,
            logger: Arc::new(NoBootstrapLogger),
        }
    }

    /// Create with a bootstrap event logger.
    pub fn with_logger(mut self, logger: Arc<dyn BootstrapLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute one convergence pass.
    ///
    /// Emits exactly one terminal log event; never panics or returns `Err`.
    pub async fn execute(&self, input: ConvergeInput) -> ConvergenceResult {
        info!("Starting bootstrap convergence for {}", input.config);

        if let Err(reason) = self.probe(&input.params).await {
            return self.fail(reason);
        }

        self.initiate(&input.config).await
    }

    /// Run the liveness probe, retrying per `params` before giving up.
    async fn probe(&self, params: &ConvergenceParams) -> Result<(), FailureReason> {
        let mut attempt = 1u32;
        loop {
            match self.backend.ping().await {
                Ok(()) => {
                    debug!("Liveness probe succeeded on attempt {}", attempt);
                    return Ok(());
                }
                Err(e) => match params.backoff_after(attempt) {
                    Some(delay) => {
                        warn!(
                            "Liveness probe attempt {}/{} failed: {}; retrying in {:?}",
                            attempt, params.probe_attempts, e, delay
                        );
                        self.logger.log(&BootstrapEvent::notice(
                            "probe_retry",
                            format!("probe attempt {} failed, retrying", attempt),
                            serde_json::json!({
                                "attempt": attempt,
                                "max_attempts": params.probe_attempts,
                                "error": e.to_string(),
                                "backoff_ms": delay.as_millis() as u64,
                            }),
                        ));
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                    None => {
                        return Err(FailureReason::Connectivity {
                            message: e.to_string(),
                        });
                    }
                },
            }
        }
    }

    /// Send the initiation request and classify the response.
    async fn initiate(&self, config: &ClusterConfig) -> ConvergenceResult {
        match self.backend.initiate(config).await {
            Ok(ack) if ack.ok => {
                info!("Replica set {} initiated", config.set_name);
                self.logger.log(&BootstrapEvent::info(
                    "initiated",
                    format!("replica set {} initiated", config.set_name),
                    serde_json::json!({
                        "set_name": config.set_name,
                        "members": config.member_summary(),
                        "response": ack.response,
                    }),
                ));
                ConvergenceResult::Success
            }
            Ok(ack) => self.fail(FailureReason::InitializationRejected {
                response: ack.response,
            }),
            Err(AdminError::Command { code, message })
                if is_already_initialized(code, &message) =>
            {
                info!("Replica set {} was already initialized", config.set_name);
                self.logger.log(&BootstrapEvent::notice(
                    "already_initialized",
                    format!("replica set {} already initialized", config.set_name),
                    serde_json::json!({
                        "set_name": config.set_name,
                        "code": code,
                    }),
                ));
                ConvergenceResult::AlreadyInitialized
            }
            Err(e) => self.fail(FailureReason::Unexpected {
                message: e.to_string(),
            }),
        }
    }

    /// Log a terminal failure and wrap it in the result.
    fn fail(&self, reason: FailureReason) -> ConvergenceResult {
        warn!("Bootstrap convergence failed: {}", reason);
        let (event_type, payload) = match &reason {
            FailureReason::Connectivity { message } => (
                "probe_failed",
                serde_json::json!({ "error": message }),
            ),
            FailureReason::InitializationRejected { response } => (
                "initiation_rejected",
                serde_json::json!({ "response": response }),
            ),
            FailureReason::Unexpected { message } => (
                "initiation_failed",
                serde_json::json!({ "error": message }),
            ),
        };
        self.logger
            .log(&BootstrapEvent::error(event_type, reason.to_string(), payload));
        ConvergenceResult::Failed(reason)
    }
}
