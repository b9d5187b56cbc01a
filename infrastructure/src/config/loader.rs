//! Configuration loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables: `REPLSET_URI`,
    ///    `REPLSET_REPLICA_SET__NAME`, `REPLSET_PROBE__ATTEMPTS`, ...
    ///    (`__` separates nesting levels)
    /// 2. Explicit config path (if provided)
    /// 3. Working directory: `./replset.toml` or `./.replset.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add working-directory config files (check both names)
        for filename in &["replset.toml", ".replset.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Environment variables override everything
        figment = figment.merge(Env::prefixed("REPLSET_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.replica_set.name, "rs0");
        assert_eq!(config.probe.attempts, 1);
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(
            file,
            r#"
            uri = "mongodb://other:27017/"

            [replica_set]
            name = "rs9"
            "#
        )
        .unwrap();

        let path = file.path().to_path_buf();
        let config = ConfigLoader::load(Some(&path)).unwrap();

        assert_eq!(config.uri, "mongodb://other:27017/");
        assert_eq!(config.replica_set.name, "rs9");
        // Untouched values keep their defaults
        assert_eq!(config.replica_set.members[0].host, "mongodb:27017");
        assert_eq!(config.probe.timeout_secs, 10);
    }

    #[test]
    fn test_env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "replset.toml",
                r#"
                uri = "mongodb://file:27017/"

                [probe]
                attempts = 2
                "#,
            )?;
            jail.set_env("REPLSET_URI", "mongodb://env:27017/");
            jail.set_env("REPLSET_PROBE__ATTEMPTS", "7");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;

            assert_eq!(config.uri, "mongodb://env:27017/");
            assert_eq!(config.probe.attempts, 7);
            Ok(())
        });
    }
}
