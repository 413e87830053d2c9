pub mod aggregator;
pub mod etl;
pub mod extractor;
pub mod pipeline;

pub use crate::domain::model::{BatchResult, ProfileOutcome, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Fetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
