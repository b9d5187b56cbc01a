//! Domain layer for replset-bootstrap
//!
//! This crate contains the core entities and value objects of the bootstrap
//! convergence procedure. It has no dependencies on infrastructure or the
//! database driver.
//!
//! # Core Concepts
//!
//! ## Convergence
//!
//! Bringing a replica set from an unknown state to "active" is modeled as a
//! single-shot convergence: the procedure either initiates the set, observes
//! that a prior run already did, or fails. Re-running after success is safe
//! because the backend rejects duplicate initiation with a recognizable
//! signal, which the domain reclassifies as a benign outcome.

pub mod cluster;
pub mod convergence;
pub mod core;

// Re-export commonly used types
pub use cluster::entities::{ClusterConfig, ReplicaMember};
pub use convergence::classify::is_already_initialized;
pub use convergence::outcome::{ConvergenceResult, FailureReason};
pub use core::error::DomainError;
