//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! the `REPLSET_*` environment variables. Defaults mirror the canonical
//! single-node deployment: set `rs0` with one member at `mongodb:27017`.

use replset_application::ConvergenceParams;
use replset_domain::{ClusterConfig, DomainError, ReplicaMember};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Raw replica-set configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplicaSetConfig {
    /// Replica set name
    pub name: String,
    /// Member list
    pub members: Vec<FileMemberConfig>,
}

impl Default for FileReplicaSetConfig {
    fn default() -> Self {
        Self {
            name: "rs0".to_string(),
            members: vec![FileMemberConfig {
                id: 0,
                host: "mongodb:27017".to_string(),
            }],
        }
    }
}

/// Raw member entry from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMemberConfig {
    pub id: u32,
    pub host: String,
}

/// Raw probe configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProbeConfig {
    /// Server-selection timeout for the liveness probe, in seconds
    pub timeout_secs: u64,
    /// Probe attempts before giving up (1 = no retry)
    pub attempts: u32,
    /// Delay before the second probe attempt, in milliseconds
    pub backoff_ms: u64,
    /// Multiplier applied to the delay after each failed attempt
    pub backoff_multiplier: f64,
}

impl Default for FileProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            attempts: 1,
            backoff_ms: 500,
            backoff_multiplier: 2.0,
        }
    }
}

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Optional JSONL event log file
    pub file: Option<PathBuf>,
}

/// Complete raw configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection URI
    pub uri: String,
    pub replica_set: FileReplicaSetConfig,
    pub probe: FileProbeConfig,
    pub log: FileLogConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://mongodb:27017/".to_string(),
            replica_set: FileReplicaSetConfig::default(),
            probe: FileProbeConfig::default(),
            log: FileLogConfig::default(),
        }
    }
}

impl FileConfig {
    /// Build the validated domain configuration.
    pub fn to_cluster_config(&self) -> Result<ClusterConfig, DomainError> {
        let members = self
            .replica_set
            .members
            .iter()
            .map(|m| ReplicaMember::new(m.id, m.host.clone()))
            .collect();
        ClusterConfig::new(self.replica_set.name.clone(), members)
    }

    /// Build the probe-loop parameters.
    pub fn to_params(&self) -> ConvergenceParams {
        ConvergenceParams::default()
            .with_probe_attempts(self.probe.attempts)
            .with_probe_backoff(Duration::from_millis(self.probe.backoff_ms))
            .with_backoff_multiplier(self.probe.backoff_multiplier)
    }

    /// Probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe.timeout_secs)
    }
}
