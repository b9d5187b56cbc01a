//! Replica-set cluster configuration

pub mod entities;

pub use entities::{ClusterConfig, ReplicaMember};
