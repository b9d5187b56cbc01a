//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Replica set name cannot be empty")]
    EmptySetName,

    #[error("Replica set must have at least one member")]
    NoMembers,

    #[error("Duplicate member id: {0}")]
    DuplicateMemberId(u32),

    #[error("Invalid member host: {0}")]
    InvalidMemberHost(String),
}
