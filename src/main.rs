use clap::Parser;
use scholar_etl::core::ConfigProvider;
use scholar_etl::utils::error::{ErrorSeverity, EtlError};
use scholar_etl::utils::{logger, validation::Validate};
use scholar_etl::{CliConfig, EtlEngine, LocalStorage, ScholarPipeline, TomlConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse().with_default_profiles();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting scholar-etl CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let outcome = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TomlConfig::from_file(&path) {
                Ok(config) => {
                    let monitor = cli.monitor || config.monitoring_enabled();
                    run(config, monitor).await
                }
                Err(e) => Err(e),
            }
        }
        None => {
            let monitor = cli.monitor;
            run(cli, monitor).await
        }
    };

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Scrape completed successfully!");
            println!("✅ Scrape completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Scrape failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn run<C>(config: C, monitor: bool) -> Result<String, EtlError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;
    tracing::info!(
        "Configured {} profiles, output: {} ({})",
        config.profiles().len(),
        config.output_path(),
        config.output_formats().join(", ")
    );

    if monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = ScholarPipeline::new(storage, config)?;
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor);

    engine.run().await
}
