//! Rule set loading
//!
//! Locations are resolved as follows:
//! - `http://...` / `https://...`: fetched through the [`RemoteConfigProvider`]
//! - `file:<path>`: read from the filesystem
//! - paths ending in `.json`, `.yaml` or `.yml`: read from the filesystem
//! - `classpath:<name>` and bare names: `<rules_dir>/<name>.json`

use crate::error::{RepositoryError, RepositoryResult};
use crate::remote::RemoteConfigProvider;
use async_trait::async_trait;
use ruleflow_core::Rules;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const FILE_PREFIX: &str = "file:";
const CLASSPATH_PREFIX: &str = "classpath:";

/// Serialization format of a rule document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RulesFormat {
    #[default]
    Json,
    Yaml,
}

impl RulesFormat {
    /// Infer the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                RulesFormat::Yaml
            }
            _ => RulesFormat::Json,
        }
    }

    /// Infer the format from the path of a URL, ignoring its query and fragment
    pub fn from_url(url: &str) -> Self {
        match reqwest::Url::parse(url) {
            Ok(parsed) => Self::from_path(Path::new(parsed.path())),
            Err(_) => {
                let path = url.split(['?', '#']).next().unwrap_or(url);
                Self::from_path(Path::new(path))
            }
        }
    }
}

/// Loads rule sets by location
#[async_trait]
pub trait RulesLoader: Send + Sync {
    /// Load the rule set at `location`
    async fn load(&self, location: &str) -> RepositoryResult<Rules>;

    /// Parse a rule document already in memory
    fn load_bytes(&self, content: &[u8], format: RulesFormat) -> RepositoryResult<Rules> {
        match format {
            RulesFormat::Json => Ok(serde_json::from_slice(content)?),
            RulesFormat::Yaml => Ok(serde_yaml::from_slice(content)?),
        }
    }

    /// Release cached state
    fn clean_up(&self) {}
}

/// Where a location string points
#[derive(Debug, Clone, PartialEq, Eq)]
enum RulesLocation {
    Remote(String),
    File(PathBuf),
}

/// Loads rule sets from the filesystem and, when configured, over HTTP
#[derive(Debug, Clone)]
pub struct RulesFileLoader {
    rules_dir: PathBuf,
    remote: Option<Arc<RemoteConfigProvider>>,
}

impl Default for RulesFileLoader {
    fn default() -> Self {
        Self::new("rules")
    }
}

impl RulesFileLoader {
    /// Create a loader resolving named rule sets under `rules_dir`
    pub fn new(rules_dir: impl Into<PathBuf>) -> Self {
        Self {
            rules_dir: rules_dir.into(),
            remote: None,
        }
    }

    /// Enable remote locations
    pub fn with_remote(mut self, remote: Arc<RemoteConfigProvider>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn rules_dir(&self) -> &Path {
        &self.rules_dir
    }

    fn resolve(&self, location: &str) -> RepositoryResult<RulesLocation> {
        let location = location.trim();
        if location.is_empty() {
            return Err(RepositoryError::UnsupportedLocation(location.to_string()));
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            return Ok(RulesLocation::Remote(location.to_string()));
        }
        if let Some(path) = location.strip_prefix(FILE_PREFIX) {
            return Ok(RulesLocation::File(PathBuf::from(path)));
        }
        if let Some(name) = location.strip_prefix(CLASSPATH_PREFIX) {
            return Ok(RulesLocation::File(self.named(name.trim_start_matches('/'))));
        }
        if has_rules_extension(location) {
            return Ok(RulesLocation::File(PathBuf::from(location)));
        }
        Ok(RulesLocation::File(self.named(location)))
    }

    fn named(&self, name: &str) -> PathBuf {
        if has_rules_extension(name) {
            self.rules_dir.join(name)
        } else {
            self.rules_dir.join(format!("{name}.json"))
        }
    }

    async fn load_file(&self, path: &Path) -> RepositoryResult<Rules> {
        let content = tokio::fs::read(path).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                RepositoryError::NotFound {
                    location: path.display().to_string(),
                }
            } else {
                RepositoryError::Io(err)
            }
        })?;
        self.load_bytes(&content, RulesFormat::from_path(path))
    }

    async fn load_remote(&self, url: &str) -> RepositoryResult<Rules> {
        let remote = self.remote.as_ref().ok_or_else(|| {
            RepositoryError::NotConfigured(format!("remote config provider required for {url}"))
        })?;
        let content = remote.get_config(url).await?;
        self.load_bytes(&content, RulesFormat::from_url(url))
    }
}

fn has_rules_extension(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.ends_with(".json") || lower.ends_with(".yaml") || lower.ends_with(".yml")
}

#[async_trait]
impl RulesLoader for RulesFileLoader {
    async fn load(&self, location: &str) -> RepositoryResult<Rules> {
        let resolved = self.resolve(location)?;
        debug!("Loading rules from {:?}", resolved);
        match resolved {
            RulesLocation::Remote(url) => self.load_remote(&url).await,
            RulesLocation::File(path) => self.load_file(&path).await,
        }
    }

    fn clean_up(&self) {
        if let Some(remote) = &self.remote {
            remote.clear_cache();
        }
    }
}
