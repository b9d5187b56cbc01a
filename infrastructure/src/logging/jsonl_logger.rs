//! JSONL file writer for bootstrap events.
//!
//! Each [`BootstrapEvent`] is serialized as a single JSON line with `type`,
//! `timestamp`, and `message` fields merged into the payload, appended via a
//! buffered writer.

use replset_application::ports::bootstrap_logger::{BootstrapEvent, BootstrapLogger};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL bootstrap logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Each record is flushed as it
/// is written so the log survives an abrupt process exit.
pub struct JsonlBootstrapLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlBootstrapLogger {
    /// Create a new logger writing to the given path.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be created.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create bootstrap log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not create bootstrap log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BootstrapLogger for JsonlBootstrapLogger {
    fn log(&self, event: &BootstrapEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        // Build the record: merge payload with type + timestamp + message
        let record = if let serde_json::Value::Object(mut map) = event.payload.clone() {
            map.insert(
                "type".to_string(),
                serde_json::Value::String(event.event_type.to_string()),
            );
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
            map.insert(
                "message".to_string(),
                serde_json::Value::String(event.message.clone()),
            );
            serde_json::Value::Object(map)
        } else {
            serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "message": event.message,
                "payload": event.payload,
            })
        };

        let mut writer = match self.writer.lock() {
            Ok(w) => w,
            Err(_) => return,
        };
        if let Ok(line) = serde_json::to_string(&record) {
            // Logging failures are deliberately ignored
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}
