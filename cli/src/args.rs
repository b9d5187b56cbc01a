//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for replset-bootstrap
#[derive(Parser, Debug)]
#[command(name = "replset-bootstrap")]
#[command(author, version, about = "Idempotently bring a replica set to its active state")]
#[command(long_about = r#"
replset-bootstrap converges a MongoDB deployment to "replica set active".
It is safe to run on every container start: a set that was initiated by a
prior run is recognized and reported as a benign outcome.

Configuration is merged from (in priority order):
1. REPLSET_* environment variables (REPLSET_URI, REPLSET_PROBE__ATTEMPTS, ...)
2. --config <path>     Explicit config file
3. ./replset.toml      Working-directory config
4. Built-in defaults   (set rs0, single member mongodb:27017)

Example:
  replset-bootstrap
  replset-bootstrap --uri mongodb://db0:27017/ --set-name rs1 \
      --member 0:db0:27017 --member 1:db1:27017
"#)]
pub struct Cli {
    /// Backend connection URI
    #[arg(long, value_name = "URI")]
    pub uri: Option<String>,

    /// Replica set name
    #[arg(long, value_name = "NAME")]
    pub set_name: Option<String>,

    /// Replica set member as `<id>:<host>` (can be specified multiple times)
    #[arg(long, value_name = "ID:HOST")]
    pub member: Vec<String>,

    /// Probe attempts before giving up (1 = no retry)
    #[arg(long, value_name = "N")]
    pub probe_attempts: Option<u32>,

    /// Write a JSONL bootstrap event log to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the console event log (exit code still reports the outcome)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["replset-bootstrap"]);
        assert!(cli.uri.is_none());
        assert!(cli.member.is_empty());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_repeated_members() {
        let cli = Cli::parse_from([
            "replset-bootstrap",
            "--member",
            "0:db0:27017",
            "--member",
            "1:db1:27017",
        ]);
        assert_eq!(cli.member, vec!["0:db0:27017", "1:db1:27017"]);
    }
}
