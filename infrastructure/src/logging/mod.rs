//! Bootstrap log sinks

pub mod console_logger;
pub mod jsonl_logger;

pub use console_logger::ConsoleBootstrapLogger;
pub use jsonl_logger::JsonlBootstrapLogger;
