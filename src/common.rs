// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket;
mod capability;
mod cost;
mod metric_query;
mod metrics_service;
mod run_config;
mod storage_class;
mod storage_service;

#[cfg(test)]
pub mod fakes;

pub use bucket::*;
pub use capability::*;
pub use cost::*;
pub use metric_query::*;
pub use metrics_service::*;
pub use run_config::*;
pub use storage_class::*;
pub use storage_service::*;
