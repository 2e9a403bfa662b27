//! Built-in `system-data` source

use super::adaptor::{DataFetchingContext, DataSourceAdaptor};
use crate::error::{DataSourceError, Result};
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use ruleflow_core::{DataSet, Parameter};

/// Source name of the built-in adaptor
pub const SYSTEM_DATA_SOURCE: &str = "system-data";

/// Serves system values; currently only `date-time` (now, RFC 3339 UTC)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDataSourceAdaptor;

#[async_trait]
impl DataSourceAdaptor for SystemDataSourceAdaptor {
    async fn fetch(&self, context: DataFetchingContext) -> Result<DataSet> {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        context
            .parameter_keys
            .into_iter()
            .map(|key| {
                if key.name().eq_ignore_ascii_case("date-time") {
                    Ok(Parameter::with_value(key, now.clone()))
                } else {
                    Err(DataSourceError::fetch_failed(
                        SYSTEM_DATA_SOURCE,
                        format!("system data attribute not implemented - {}", key.name()),
                    ))
                }
            })
            .collect()
    }
}
