//! Convergence outcomes and backend-error classification

pub mod classify;
pub mod outcome;

pub use classify::is_already_initialized;
pub use outcome::{ConvergenceResult, FailureReason};
