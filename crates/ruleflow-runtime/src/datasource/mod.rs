//! Data source layer
//!
//! Adaptors are registered by name in an [`AdaptorRegistry`]; the
//! [`DataFetchService`] fans requests out to them concurrently and collects
//! the results into a [`DataFetchResult`].

pub mod adaptor;
pub mod mapper;
pub mod registry;
pub mod result;
pub mod service;
pub mod system;

pub use adaptor::{DataFetchingContext, DataSourceAdaptor};
pub use mapper::{DataSetMapper, JsonPointerDataSetMapper};
pub use registry::AdaptorRegistry;
pub use result::{DataFetchResult, DataFetchResultBuilder};
pub use service::DataFetchService;
pub use system::{SystemDataSourceAdaptor, SYSTEM_DATA_SOURCE};
