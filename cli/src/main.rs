//! CLI entrypoint for replset-bootstrap
//!
//! Wires the MongoDB adapter and log sinks into the convergence use case,
//! runs one bootstrap pass, and maps the outcome onto the process exit code
//! (0 for an active set, 1 for a failed run).

mod args;

use anyhow::{Context, Result, bail};
use args::Cli;
use clap::Parser;
use replset_application::{CompositeBootstrapLogger, ConvergeInput, ConvergeUseCase};
use replset_domain::{ConvergenceResult, ReplicaMember};
use replset_infrastructure::config::file_config::FileMemberConfig;
use replset_infrastructure::{
    ConfigLoader, ConsoleBootstrapLogger, FileConfig, JsonlBootstrapLogger, MongoBackendAdmin,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // All sinks are dropped (and flushed) inside run() before the exit.
    let exit_code = run().await?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging: RUST_LOG wins, verbosity flags set the default
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting replset-bootstrap");

    // Load file/env configuration, then apply CLI overrides
    let mut file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("configuration error: {}", e))?
    };
    apply_overrides(&mut file_config, &cli)?;

    let cluster_config = file_config
        .to_cluster_config()
        .context("invalid replica set configuration")?;
    let params = file_config.to_params();

    // === Dependency Injection ===
    let backend = Arc::new(
        MongoBackendAdmin::connect(&file_config.uri, file_config.probe_timeout())
            .await
            .map_err(|e| anyhow::anyhow!("backend client setup failed: {}", e))?,
    );

    let mut logger = CompositeBootstrapLogger::new();
    if !cli.quiet {
        logger = logger.push(Arc::new(ConsoleBootstrapLogger::new()));
    }
    let log_file = cli.log_file.as_ref().or(file_config.log.file.as_ref());
    if let Some(path) = log_file
        && let Some(jsonl) = JsonlBootstrapLogger::new(path)
    {
        logger = logger.push(Arc::new(jsonl));
    }

    let use_case = ConvergeUseCase::new(backend).with_logger(Arc::new(logger));

    let result = use_case
        .execute(ConvergeInput::new(cluster_config).with_params(params))
        .await;

    Ok(exit_code(&result))
}

/// Map the convergence outcome onto the process exit code: an active set
/// (freshly initiated or pre-existing) is 0, any failed run is 1.
fn exit_code(result: &ConvergenceResult) -> i32 {
    if result.is_converged() { 0 } else { 1 }
}

/// Default log directive for the `-v` count (-v = info, -vv = debug,
/// -vvv = trace), used when `RUST_LOG` is unset.
fn default_log_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Apply CLI flags on top of the merged file/env configuration.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) -> Result<()> {
    if let Some(uri) = &cli.uri {
        config.uri = uri.clone();
    }
    if let Some(name) = &cli.set_name {
        config.replica_set.name = name.clone();
    }
    if !cli.member.is_empty() {
        let members = cli
            .member
            .iter()
            .map(|raw| parse_member(raw))
            .collect::<Result<Vec<_>>>()?;
        config.replica_set.members = members
            .into_iter()
            .map(|m| FileMemberConfig {
                id: m.id,
                host: m.host,
            })
            .collect();
    }
    if let Some(attempts) = cli.probe_attempts {
        config.probe.attempts = attempts;
    }
    Ok(())
}

/// Parse a `--member` value of the form `<id>:<host>`, where `<host>` may
/// itself contain a port separator (`0:db0:27017`).
fn parse_member(raw: &str) -> Result<ReplicaMember> {
    let Some((id, host)) = raw.split_once(':') else {
        bail!("invalid --member '{}': expected <id>:<host>", raw);
    };
    if host.is_empty() {
        bail!("invalid --member '{}': host is empty", raw);
    }
    let id: u32 = id
        .parse()
        .with_context(|| format!("invalid --member '{}': id must be a number", raw))?;
    Ok(ReplicaMember::new(id, host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use replset_domain::FailureReason;

    #[test]
    fn test_exit_code_zero_when_converged() {
        assert_eq!(exit_code(&ConvergenceResult::Success), 0);
        assert_eq!(exit_code(&ConvergenceResult::AlreadyInitialized), 0);
    }

    #[test]
    fn test_exit_code_one_on_failure() {
        let failed = ConvergenceResult::Failed(FailureReason::Connectivity {
            message: "timeout".to_string(),
        });
        assert_eq!(exit_code(&failed), 1);

        let unexpected = ConvergenceResult::Failed(FailureReason::Unexpected {
            message: "connection refused".to_string(),
        });
        assert_eq!(exit_code(&unexpected), 1);
    }

    #[test]
    fn test_default_log_directive_per_verbosity() {
        assert_eq!(default_log_directive(0), "warn");
        assert_eq!(default_log_directive(1), "info");
        assert_eq!(default_log_directive(2), "debug");
        assert_eq!(default_log_directive(3), "trace");
        assert_eq!(default_log_directive(9), "trace");
    }

    #[test]
    fn test_parse_member_with_port() {
        let member = parse_member("0:db0:27017").unwrap();
        assert_eq!(member.id, 0);
        assert_eq!(member.host, "db0:27017");
    }

    #[test]
    fn test_parse_member_rejects_garbage() {
        assert!(parse_member("nonsense").is_err());
        assert!(parse_member("x:db0:27017").is_err());
        assert!(parse_member("0:").is_err());
    }

    #[test]
    fn test_overrides_replace_members() {
        let mut config = FileConfig::default();
        let cli = Cli::parse_from([
            "replset-bootstrap",
            "--set-name",
            "rs1",
            "--member",
            "0:db0:27017",
            "--member",
            "1:db1:27017",
        ]);
        apply_overrides(&mut config, &cli).unwrap();
        assert_eq!(config.replica_set.name, "rs1");
        assert_eq!(config.replica_set.members.len(), 2);
        assert_eq!(config.replica_set.members[1].host, "db1:27017");
    }
}
