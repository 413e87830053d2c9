//! HTTP delivery: `GET /scrape` runs the configured batch and answers with
//! the ordered list of profile records and error objects.

use crate::adapters::http::HttpFetcher;
use crate::config::toml_config::SourceConfig;
use crate::core::aggregator::BatchAggregator;
use crate::core::extractor::ProfileExtractor;
use crate::domain::model::BatchResult;
use crate::utils::error::Result;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

pub struct AppState {
    aggregator: BatchAggregator<HttpFetcher>,
    profiles: Vec<String>,
}

impl AppState {
    pub fn from_source(source: &SourceConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&source.user_agent, source.timeout_seconds)?;
        Ok(Self::new(
            fetcher,
            ProfileExtractor::new(source.link_base.as_str()),
            source.profiles.clone(),
        ))
    }

    pub fn new(fetcher: HttpFetcher, extractor: ProfileExtractor, profiles: Vec<String>) -> Self {
        Self {
            aggregator: BatchAggregator::new(fetcher, extractor),
            profiles,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/scrape", get(scrape_handler))
        .with_state(state)
}

async fn health_handler() -> &'static str {
    "OK"
}

async fn scrape_handler(State(state): State<Arc<AppState>>) -> Json<BatchResult> {
    tracing::info!(profiles = state.profiles.len(), "Scrape request");
    let results = state.aggregator.aggregate(&state.profiles).await;
    tracing::info!(
        failed = results.iter().filter(|r| r.is_error()).count(),
        "Scrape finished"
    );
    Json(results)
}
