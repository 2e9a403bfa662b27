//! ruleflow Runtime - Data fetching and rule evaluation
//!
//! This crate provides:
//! - The data source adaptor contract and an explicit adaptor registry
//! - A concurrent data fetch service with per-source failure isolation
//! - The rules evaluator and its predicate matchers

pub mod datasource;
pub mod error;
pub mod evaluator;

pub use datasource::{
    AdaptorRegistry, DataFetchResult, DataFetchService, DataFetchingContext, DataSetMapper,
    DataSourceAdaptor, JsonPointerDataSetMapper, SystemDataSourceAdaptor, SYSTEM_DATA_SOURCE,
};
pub use error::{DataSourceError, Result};
pub use evaluator::RulesEvaluator;
