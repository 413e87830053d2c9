use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting scrape...");
        self.monitor.log_stats("Start");

        // Extract
        let results = self.pipeline.extract().await?;
        tracing::info!("Extracted {} profile entries", results.len());
        self.monitor.log_stats("Extract");

        // Transform
        let transformed = self.pipeline.transform(results).await?;
        tracing::info!(
            "Transformed {} profiles ({} failed, {} papers)",
            transformed.summary.succeeded,
            transformed.summary.failed,
            transformed.summary.papers
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(transformed).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
