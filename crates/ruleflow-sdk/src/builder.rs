//! Builder pattern for RulesEngine

use crate::config::EngineConfig;
use crate::engine::RulesEngine;
use crate::error::Result;
use ruleflow_repository::{RemoteConfigProvider, RulesFileLoader, RulesLoader};
use ruleflow_runtime::{
    AdaptorRegistry, DataFetchService, DataSourceAdaptor, SystemDataSourceAdaptor,
    SYSTEM_DATA_SOURCE,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Builder for RulesEngine
///
/// # Example
///
/// ```rust,ignore
/// use ruleflow_sdk::{EngineConfig, RulesEngineBuilder};
///
/// // Named rule sets from a directory, one custom data source
/// let engine = RulesEngineBuilder::new()
///     .with_rules_dir("rules")
///     .with_adaptor("customer", Arc::new(CustomerAdaptor::new()))
///     .build()?;
///
/// // Configuration from a file plus RULEFLOW_ environment variables
/// let engine = RulesEngineBuilder::new()
///     .with_config(EngineConfig::load("ruleflow.yaml")?)
///     .build()?;
/// ```
pub struct RulesEngineBuilder {
    config: EngineConfig,
    registry: AdaptorRegistry,
    loader: Option<Arc<dyn RulesLoader>>,
}

impl RulesEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            registry: AdaptorRegistry::new(),
            loader: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the directory named rule sets are loaded from
    pub fn with_rules_dir(mut self, rules_dir: impl Into<PathBuf>) -> Self {
        self.config.rules_dir = rules_dir.into();
        self
    }

    /// Register a data source adaptor under `name`
    pub fn with_adaptor(
        mut self,
        name: impl Into<String>,
        adaptor: Arc<dyn DataSourceAdaptor>,
    ) -> Self {
        self.registry.register(name, adaptor);
        self
    }

    /// Adaptor serving every source name without its own registration
    pub fn with_fallback_adaptor(mut self, adaptor: Arc<dyn DataSourceAdaptor>) -> Self {
        self.registry = self.registry.with_fallback(adaptor);
        self
    }

    /// Use a custom rules loader instead of the file/remote loader
    pub fn with_loader(mut self, loader: Arc<dyn RulesLoader>) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Build the engine.
    ///
    /// Registers the `system-data` adaptor unless a caller already did.
    pub fn build(self) -> Result<RulesEngine> {
        let mut registry = self.registry;
        if !registry.contains(SYSTEM_DATA_SOURCE) {
            registry.register(SYSTEM_DATA_SOURCE, Arc::new(SystemDataSourceAdaptor));
        }

        let loader = match self.loader {
            Some(loader) => loader,
            None => {
                let remote = RemoteConfigProvider::new(self.config.remote.clone())?;
                Arc::new(
                    RulesFileLoader::new(self.config.rules_dir.clone())
                        .with_remote(Arc::new(remote)),
                )
            }
        };

        tracing::debug!(
            "Building rules engine with data sources: {:?}",
            registry.names().collect::<Vec<_>>()
        );
        Ok(RulesEngine::new(DataFetchService::new(registry), Some(loader)))
    }
}

impl Default for RulesEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
