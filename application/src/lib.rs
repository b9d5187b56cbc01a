//! Application layer for replset-bootstrap
//!
//! This crate contains the convergence use case, port definitions, and
//! application configuration. It depends only on the domain layer; the
//! database driver and log sinks plug in through the ports.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConvergenceParams;
pub use ports::{
    backend_admin::{AdminError, BackendAdmin, InitiateAck},
    bootstrap_logger::{
        BootstrapEvent, BootstrapLogger, CompositeBootstrapLogger, NoBootstrapLogger, Severity,
    },
};
pub use use_cases::converge::{ConvergeInput, ConvergeUseCase};
