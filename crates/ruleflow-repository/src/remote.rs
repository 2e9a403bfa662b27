//! Remote configuration provider
//!
//! Fetches documents over HTTP. With caching enabled, fresh responses are
//! served from a [`SimpleCache`]; when a fetch fails, an expired response still
//! inside its stale window is used instead of surfacing the error.

use crate::cache::SimpleCache;
use crate::config::RemoteConfigProperties;
use crate::error::{RepositoryError, RepositoryResult};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{error, info, warn};

/// HTTP fetcher for rules and configuration documents
#[derive(Debug, Clone)]
pub struct RemoteConfigProvider {
    client: Client,
    properties: RemoteConfigProperties,
    cache: SimpleCache,
}

impl RemoteConfigProvider {
    /// Create a provider from properties
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(properties: RemoteConfigProperties) -> RepositoryResult<Self> {
        let client = Client::builder()
            .connect_timeout(properties.connect_timeout())
            .timeout(properties.request_timeout())
            .build()?;

        Ok(Self {
            client,
            cache: SimpleCache::with_max_entries(properties.cache_max_entries),
            properties,
        })
    }

    pub fn properties(&self) -> &RemoteConfigProperties {
        &self.properties
    }

    /// Response cache, shared by clones of this provider
    pub fn cache(&self) -> &SimpleCache {
        &self.cache
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Fetch the raw document at `url`
    pub async fn get_config(&self, url: &str) -> RepositoryResult<Vec<u8>> {
        if !self.properties.use_cache {
            return self.fetch_remote_config(url).await;
        }

        if let Some(content) = self.cache.get(url, false) {
            return Ok(content);
        }

        let content = self.fetch_remote_config(url).await?;
        self.cache.add_with_expiry(
            url,
            content.clone(),
            self.properties.cache_expiry(),
            self.properties.max_stale(),
        );
        Ok(content)
    }

    /// Fetch the document at `url` and deserialize it as JSON
    pub async fn get_config_json<T: DeserializeOwned>(&self, url: &str) -> RepositoryResult<T> {
        let content = self.get_config(url).await?;
        Ok(serde_json::from_slice(&content)?)
    }

    async fn fetch_remote_config(&self, url: &str) -> RepositoryResult<Vec<u8>> {
        match self.fetch(url).await {
            Ok(content) => {
                info!("Successfully fetched config from url {}", url);
                Ok(content)
            }
            Err(err) => match self.cache.get(url, true) {
                Some(stale) => {
                    warn!("Falling back to cached response for url {}: {}", url, err);
                    Ok(stale)
                }
                None => {
                    error!(
                        "Failed to fetch config from url {}. Not available in cache either: {}",
                        url, err
                    );
                    Err(err)
                }
            },
        }
    }

    async fn fetch(&self, url: &str) -> RepositoryResult<Vec<u8>> {
        let mut request = self.client.get(url);
        if let Some(auth) = self
            .properties
            .basic_auth
            .as_deref()
            .filter(|auth| !auth.trim().is_empty())
        {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}
