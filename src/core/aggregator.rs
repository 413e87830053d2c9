use crate::core::extractor::ProfileExtractor;
use crate::domain::model::{BatchResult, ErrorRecord, ProfileOutcome};
use crate::domain::ports::Fetcher;

/// Runs every profile source through the fetcher and the extractor, one at a
/// time and in input order. A failed source becomes an error entry and the
/// loop moves on; the batch as a whole cannot fail.
pub struct BatchAggregator<F: Fetcher> {
    fetcher: F,
    extractor: ProfileExtractor,
}

impl<F: Fetcher> BatchAggregator<F> {
    pub fn new(fetcher: F, extractor: ProfileExtractor) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn aggregate<S: AsRef<str>>(&self, sources: &[S]) -> BatchResult {
        let mut results = Vec::with_capacity(sources.len());

        for (index, source) in sources.iter().enumerate() {
            let source = source.as_ref();
            tracing::debug!("Fetching profile {}/{}: {}", index + 1, sources.len(), source);

            // 每輪的文件內容只活在這個區塊內
            let outcome = match self.fetcher.fetch(source).await {
                Ok(content) => {
                    let record = self.extractor.extract(&content);
                    tracing::info!(
                        "✅ {} - {} papers, {} citations",
                        record.name,
                        record.papers.len(),
                        record.total_citations
                    );
                    ProfileOutcome::Profile(record)
                }
                Err(e) => {
                    tracing::warn!("⚠️ Failed to fetch {}: {}", source, e);
                    ProfileOutcome::Error(ErrorRecord {
                        error: e.to_string(),
                    })
                }
            };

            results.push(outcome);
        }

        results
    }
}
