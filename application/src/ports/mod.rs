//! Port definitions for external collaborators

pub mod backend_admin;
pub mod bootstrap_logger;

pub use backend_admin::{AdminError, BackendAdmin, InitiateAck};
pub use bootstrap_logger::{
    BootstrapEvent, BootstrapLogger, CompositeBootstrapLogger, NoBootstrapLogger, Severity,
};
