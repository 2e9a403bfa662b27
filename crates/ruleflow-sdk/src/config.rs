//! Engine configuration

use crate::error::Result;
use ruleflow_repository::RemoteConfigProperties;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix, e.g. `RULEFLOW_RULES_DIR` or `RULEFLOW_REMOTE__USE_CACHE`
pub const ENV_PREFIX: &str = "RULEFLOW";

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory holding named rule sets (`<rules_dir>/<name>.json`)
    pub rules_dir: PathBuf,

    /// Remote rules and configuration fetching
    pub remote: RemoteConfigProperties,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from("rules"),
            remote: RemoteConfigProperties::default(),
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rules directory
    pub fn with_rules_dir(mut self, rules_dir: impl Into<PathBuf>) -> Self {
        self.rules_dir = rules_dir.into();
        self
    }

    /// Set remote configuration properties
    pub fn with_remote(mut self, remote: RemoteConfigProperties) -> Self {
        self.remote = remote;
        self
    }

    /// Load configuration from an optional file and `RULEFLOW_` environment variables.
    ///
    /// The file format follows its extension (TOML, YAML, JSON). Missing
    /// values fall back to defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: EngineConfig = settings.try_deserialize()?;
        tracing::debug!("Loaded engine configuration: {:?}", config);
        Ok(config)
    }
}
