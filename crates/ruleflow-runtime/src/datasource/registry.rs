//! Explicit registry of data source adaptors

use super::adaptor::DataSourceAdaptor;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Maps data source names to adaptors.
///
/// An optional fallback adaptor answers every name that has no explicit
/// registration (used when all sources are served from fixture data).
#[derive(Clone, Default)]
pub struct AdaptorRegistry {
    adaptors: HashMap<String, Arc<dyn DataSourceAdaptor>>,
    fallback: Option<Arc<dyn DataSourceAdaptor>>,
}

impl AdaptorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adaptor, replacing any previous one under the same name
    pub fn register(&mut self, name: impl Into<String>, adaptor: Arc<dyn DataSourceAdaptor>) {
        self.adaptors.insert(name.into(), adaptor);
    }

    /// Builder-style registration
    pub fn with_adaptor(
        mut self,
        name: impl Into<String>,
        adaptor: Arc<dyn DataSourceAdaptor>,
    ) -> Self {
        self.register(name, adaptor);
        self
    }

    /// Set the adaptor used for unregistered names
    pub fn with_fallback(mut self, adaptor: Arc<dyn DataSourceAdaptor>) -> Self {
        self.fallback = Some(adaptor);
        self
    }

    /// Resolve the adaptor for a source name
    pub fn get(&self, name: &str) -> Option<Arc<dyn DataSourceAdaptor>> {
        self.adaptors
            .get(name)
            .or(self.fallback.as_ref())
            .cloned()
    }

    /// Whether `name` is explicitly registered
    pub fn contains(&self, name: &str) -> bool {
        self.adaptors.contains_key(name)
    }

    /// Registered source names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.adaptors.keys().map(String::as_str)
    }
}

impl fmt::Debug for AdaptorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("AdaptorRegistry")
            .field("adaptors", &names)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
