//! Cluster configuration entities.
//!
//! [`ClusterConfig`] identifies the target replica set and its member list.
//! It is built once at startup from static configuration and is immutable for
//! the process lifetime. The serde representation matches the initiation
//! document the backend expects (`_id` for the set name, `members[]` with
//! `_id`/`host` per member), so adapters can serialize it directly.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single replica-set member: ordinal identifier plus host address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaMember {
    /// Ordinal identifier within the set.
    #[serde(rename = "_id")]
    pub id: u32,
    /// Host address, e.g. `mongodb:27017`.
    pub host: String,
}

impl ReplicaMember {
    pub fn new(id: u32, host: impl Into<String>) -> Self {
        Self {
            id,
            host: host.into(),
        }
    }
}

impl fmt::Display for ReplicaMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.host)
    }
}

/// Immutable replica-set configuration: set name plus ordered member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Replica set name.
    #[serde(rename = "_id")]
    pub set_name: String,
    /// Ordered member list.
    pub members: Vec<ReplicaMember>,
}

impl ClusterConfig {
    /// Build a validated configuration.
    ///
    /// Rejects an empty set name, an empty member list, duplicate member
    /// ids, and members with an empty host.
    pub fn new(
        set_name: impl Into<String>,
        members: Vec<ReplicaMember>,
    ) -> Result<Self, DomainError> {
        let set_name = set_name.into();
        if set_name.trim().is_empty() {
            return Err(DomainError::EmptySetName);
        }
        if members.is_empty() {
            return Err(DomainError::NoMembers);
        }
        let mut seen = HashSet::new();
        for member in &members {
            if member.host.trim().is_empty() {
                return Err(DomainError::InvalidMemberHost(member.host.clone()));
            }
            if !seen.insert(member.id) {
                return Err(DomainError::DuplicateMemberId(member.id));
            }
        }
        Ok(Self { set_name, members })
    }

    /// Single-member configuration, the common case for local deployments.
    pub fn single(set_name: impl Into<String>, host: impl Into<String>) -> Result<Self, DomainError> {
        Self::new(set_name, vec![ReplicaMember::new(0, host)])
    }

    /// Comma-separated member summary for log lines.
    pub fn member_summary(&self) -> String {
        self.members
            .iter()
            .map(|m| m.host.clone())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ClusterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.set_name, self.member_summary())
    }
}
