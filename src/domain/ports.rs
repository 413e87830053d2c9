use crate::domain::model::{BatchResult, TransformResult};
use crate::utils::error::{Result, RetrievalError};
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn profiles(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn compress(&self) -> bool;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn link_base(&self) -> &str;
}

/// 取得頁面原始內容的外部協作者。只嘗試一次，不重試。
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, source: &str) -> std::result::Result<Vec<u8>, RetrievalError>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<BatchResult>;
    async fn transform(&self, data: BatchResult) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
