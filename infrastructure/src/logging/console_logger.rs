//! Console sink for bootstrap events.
//!
//! Writes one timestamped line per event with a severity symbol:
//!
//! ```text
//! 2026-08-24T10:15:03Z [+] replica set rs0 initiated
//! 2026-08-24T10:15:04Z [!] replica set rs0 already initialized
//! 2026-08-24T10:15:05Z [-] backend unreachable: timeout
//! ```

use chrono::{SecondsFormat, Utc};
use replset_application::ports::bootstrap_logger::{BootstrapEvent, BootstrapLogger};

/// Bootstrap logger that prints one line per event to stderr.
///
/// Stderr keeps operator output out of anything piped from stdout.
#[derive(Default)]
pub struct ConsoleBootstrapLogger;

impl ConsoleBootstrapLogger {
    pub fn new() -> Self {
        Self
    }
}

/// Format an event as a single console line.
fn format_line(timestamp: &str, event: &BootstrapEvent) -> String {
    format!("{} {} {}", timestamp, event.severity.symbol(), event.message)
}

impl BootstrapLogger for ConsoleBootstrapLogger {
    fn log(&self, event: &BootstrapEvent) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        eprintln!("{}", format_line(&timestamp, event));
    }
}
