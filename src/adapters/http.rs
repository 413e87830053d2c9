use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, RetrievalError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// reqwest-backed [`Fetcher`]. Sends a browser User-Agent so the served page
/// matches what an interactive visitor gets.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, source: &str) -> std::result::Result<Vec<u8>, RetrievalError> {
        let response = self.client.get(source).send().await?;
        let status = response.status();
        tracing::debug!("Response status for {}: {}", source, status);

        if !status.is_success() {
            return Err(RetrievalError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
