pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
#[cfg(feature = "server")]
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{HttpFetcher, LocalStorage};
pub use crate::core::{
    aggregator::BatchAggregator, etl::EtlEngine, extractor::ProfileExtractor,
    pipeline::ScholarPipeline,
};
pub use crate::domain::model::{
    BatchResult, BatchSummary, ErrorRecord, PaperRecord, ProfileOutcome, ProfileRecord,
};
pub use crate::utils::error::{EtlError, Result, RetrievalError};
