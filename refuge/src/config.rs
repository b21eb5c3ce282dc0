use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use refuge_backend::BackendConfig;
use refuge_osrm::OsrmConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "REFUGE";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("configuration file '{path}' produced error: {message}")]
    FileError { path: PathBuf, message: String },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// where cached shelters, routes and the manual are kept.
    #[serde(default = "default_storage_directory")]
    pub directory: PathBuf,
}

fn default_storage_directory() -> PathBuf {
    PathBuf::from(".refuge")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_storage_directory(),
        }
    }
}

/// application configuration. values come from an optional TOML file,
/// overridden by `REFUGE_`-prefixed environment variables where nested keys
/// are separated by `__`, e.g. `REFUGE_BACKEND__API_KEY`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefugeConfig {
    #[serde(default)]
    pub routing: OsrmConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl RefugeConfig {
    /// reads the file at `path` (if given) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::FileError {
                    path: path.to_path_buf(),
                    message: String::from("file not found"),
                });
            }
            builder = builder.add_source(File::from(path));
        }
        let describe = |e: config::ConfigError| match path {
            Some(p) => ConfigError::FileError {
                path: p.to_path_buf(),
                message: e.to_string(),
            },
            None => ConfigError::InvalidConfiguration(e.to_string()),
        };
        let config = builder.add_source(env).build().map_err(describe)?;
        let result: RefugeConfig = config.try_deserialize().map_err(describe)?;
        log::debug!("loaded configuration: {result:?}");
        Ok(result)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod test {
    use std::{
        collections::HashMap,
        io::Write,
        path::{Path, PathBuf},
    };

    use config::Environment;

    use super::{ConfigError, RefugeConfig, ENV_PREFIX};

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let config = RefugeConfig::load_with(None, env(&[])).expect("defaults");
        assert_eq!(config, RefugeConfig::default());
        assert_eq!(config.routing.base_url, "http://router.project-osrm.org");
        assert_eq!(config.routing.profile, "driving");
        assert_eq!(config.storage.directory, PathBuf::from(".refuge"));
        assert_eq!(config.backend.reports_table, "reports");
        assert!(config.backend.url.is_none());
    }

    #[test]
    fn test_file_then_environment() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[routing]\nprofile = \"foot\"\n\n[backend]\nurl = \"https://demo.example.co\"\napi_key = \"from-file\""
        )
        .expect("write");

        let config = RefugeConfig::load_with(
            Some(file.path()),
            env(&[("REFUGE_BACKEND__API_KEY", "from-env")]),
        )
        .expect("should load");
        assert_eq!(config.routing.profile, "foot");
        assert_eq!(config.routing.base_url, "http://router.project-osrm.org");
        assert_eq!(config.backend.url.as_deref(), Some("https://demo.example.co"));
        assert_eq!(config.backend.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_missing_file() {
        let result = RefugeConfig::load_with(Some(Path::new("/no/such/refuge.toml")), env(&[]));
        assert!(matches!(result, Err(ConfigError::FileError { .. })));
    }
}
