//! ruleflow Repository - Rule loading, remote configuration and caching
//!
//! This crate provides:
//! - [`SimpleCache`]: a bounded key to bytes cache with expiry and stale reads
//! - [`RemoteConfigProvider`]: HTTP fetching with caching and stale fallback
//! - [`RulesLoader`] / [`RulesFileLoader`]: loading rule sets from files or URLs
//!
//! # Example
//!
//! ```no_run
//! use ruleflow_repository::{RulesFileLoader, RulesLoader};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let loader = RulesFileLoader::new("rules");
//!
//! // Resolves to rules/offers.json
//! let rules = loader.load("offers").await?;
//! println!("{} feature(s)", rules.features.len());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod remote;

pub use cache::SimpleCache;
pub use config::RemoteConfigProperties;
pub use error::{RepositoryError, RepositoryResult};
pub use loader::{RulesFileLoader, RulesFormat, RulesLoader};
pub use remote::RemoteConfigProvider;
