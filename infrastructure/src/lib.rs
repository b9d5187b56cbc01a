//! Infrastructure layer for replset-bootstrap
//!
//! Adapters for the ports defined in the application layer: the MongoDB
//! administrative client, the figment-based configuration loader, and the
//! console/JSONL bootstrap log sinks.

pub mod config;
pub mod logging;
pub mod mongo;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::{ConsoleBootstrapLogger, JsonlBootstrapLogger};
pub use mongo::MongoBackendAdmin;
