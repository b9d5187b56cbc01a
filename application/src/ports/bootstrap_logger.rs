//! Port for structured bootstrap event logging.
//!
//! Defines the [`BootstrapLogger`] trait for recording bootstrap events
//! (probe failures, initiation outcomes) to an operator-facing sink.
//!
//! This is separate from `tracing`-based diagnostics: tracing handles
//! developer-oriented messages, while this port carries the one-line-per-
//! branch operator log the bootstrap procedure promises.

use serde_json::Value;
use std::sync::Arc;

/// Severity of a bootstrap event, rendered as a symbol by console sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Normal progress (`[+]`).
    Info,
    /// Benign but noteworthy, e.g. set already initialized (`[!]`).
    Notice,
    /// The run is failing (`[-]`).
    Error,
}

impl Severity {
    /// Console symbol for this severity.
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "[+]",
            Severity::Notice => "[!]",
            Severity::Error => "[-]",
        }
    }
}

/// A structured bootstrap event for logging.
///
/// Each event has a type string, a severity, a human-readable message, and
/// a JSON payload with event-specific fields.
pub struct BootstrapEvent {
    /// Event type identifier (e.g., "initiated", "probe_failed").
    pub event_type: &'static str,
    /// Severity, used by console sinks to pick a symbol.
    pub severity: Severity,
    /// Human-readable one-line message.
    pub message: String,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl BootstrapEvent {
    pub fn new(
        event_type: &'static str,
        severity: Severity,
        message: impl Into<String>,
        payload: Value,
    ) -> Self {
        Self {
            event_type,
            severity,
            message: message.into(),
            payload,
        }
    }

    pub fn info(event_type: &'static str, message: impl Into<String>, payload: Value) -> Self {
        Self::new(event_type, Severity::Info, message, payload)
    }

    pub fn notice(event_type: &'static str, message: impl Into<String>, payload: Value) -> Self {
        Self::new(event_type, Severity::Notice, message, payload)
    }

    pub fn error(event_type: &'static str, message: impl Into<String>, payload: Value) -> Self {
        Self::new(event_type, Severity::Error, message, payload)
    }
}

/// Port for logging bootstrap events to a sink.
///
/// Implementations write each event as a single record (one console line,
/// one JSONL line). The `log` method is intentionally synchronous and
/// non-fallible so a broken sink cannot disturb the bootstrap run.
pub trait BootstrapLogger: Send + Sync {
    /// Record a bootstrap event.
    fn log(&self, event: &BootstrapEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoBootstrapLogger;

impl BootstrapLogger for NoBootstrapLogger {
    fn log(&self, _event: &BootstrapEvent) {}
}

/// Fan-out logger that forwards each event to every registered sink.
#[derive(Default)]
pub struct CompositeBootstrapLogger {
    sinks: Vec<Arc<dyn BootstrapLogger>>,
}

impl CompositeBootstrapLogger {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn push(mut self, sink: Arc<dyn BootstrapLogger>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl BootstrapLogger for CompositeBootstrapLogger {
    fn log(&self, event: &BootstrapEvent) {
        for sink in &self.sinks {
            sink.log(event);
        }
    }
}
