use crate::adapters::http::HttpFetcher;
use crate::core::aggregator::BatchAggregator;
use crate::core::extractor::ProfileExtractor;
use crate::core::{BatchResult, ConfigProvider, Fetcher, Pipeline, ProfileOutcome, Storage, TransformResult};
use crate::domain::model::BatchSummary;
use crate::utils::error::{EtlError, Result};
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const JSON_FILENAME: &str = "profiles.json";
pub const CSV_FILENAME: &str = "papers.csv";
pub const ZIP_FILENAME: &str = "scholar_output.zip";

/// papers.csv 的一列：論文攤平並附上所屬學者
#[derive(Debug, Serialize)]
struct PaperRow<'a> {
    profile: &'a str,
    title: &'a str,
    link: &'a str,
    citations: &'a str,
    year: &'a str,
}

pub struct ScholarPipeline<S: Storage, C: ConfigProvider, F: Fetcher = HttpFetcher> {
    storage: S,
    config: C,
    aggregator: BatchAggregator<F>,
}

impl<S: Storage, C: ConfigProvider> ScholarPipeline<S, C, HttpFetcher> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.user_agent(), config.timeout_seconds())?;
        Ok(Self::with_fetcher(storage, config, fetcher))
    }
}

impl<S: Storage, C: ConfigProvider, F: Fetcher> ScholarPipeline<S, C, F> {
    pub fn with_fetcher(storage: S, config: C, fetcher: F) -> Self {
        let extractor = ProfileExtractor::new(config.link_base());
        Self {
            storage,
            config,
            aggregator: BatchAggregator::new(fetcher, extractor),
        }
    }

    fn wants(&self, format: &str) -> bool {
        self.config.output_formats().iter().any(|f| f == format)
    }
}

fn papers_csv(results: &[ProfileOutcome]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["profile", "title", "link", "citations", "year"])?;

    for profile in results.iter().filter_map(ProfileOutcome::as_profile) {
        for paper in &profile.papers {
            writer.serialize(PaperRow {
                profile: &profile.name,
                title: &paper.title,
                link: &paper.link,
                citations: &paper.citations,
                year: &paper.year,
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, F: Fetcher> Pipeline for ScholarPipeline<S, C, F> {
    async fn extract(&self) -> Result<BatchResult> {
        tracing::debug!("Scraping {} profiles", self.config.profiles().len());
        Ok(self.aggregator.aggregate(self.config.profiles()).await)
    }

    async fn transform(&self, data: BatchResult) -> Result<TransformResult> {
        let summary = BatchSummary::from_results(&data);
        let json_output = serde_json::to_string_pretty(&data)?;
        let csv_output = papers_csv(&data)?;

        Ok(TransformResult {
            results: data,
            json_output,
            csv_output,
            summary,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut files: Vec<(&str, &[u8])> = Vec::new();
        if self.wants("json") {
            files.push((JSON_FILENAME, result.json_output.as_bytes()));
        }
        if self.wants("csv") {
            files.push((CSV_FILENAME, result.csv_output.as_bytes()));
        }

        if !self.config.compress() {
            for (name, data) in &files {
                tracing::debug!("Writing {} ({} bytes)", name, data.len());
                self.storage.write_file(name, data).await?;
            }
            return Ok(self.config.output_path().to_string());
        }

        tracing::debug!("Creating ZIP file with {} files", files.len());

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
            for (name, data) in &files {
                zip.start_file::<_, ()>(*name, FileOptions::default())?;
                zip.write_all(data)?;
            }
            // 完成並取回底層 Vec<u8>
            zip.finish()?.into_inner()
        };

        tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
        self.storage.write_file(ZIP_FILENAME, &zip_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), ZIP_FILENAME))
    }
}
