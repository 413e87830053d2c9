use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先，否則使用給定的預設過濾
fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = env_filter(if verbose {
        "scholar_etl=debug,info"
    } else {
        "scholar_etl=info"
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

/// 伺服器模式輸出 JSON；請求的 span 與 handler 的日誌都屬於 scholar_etl
pub fn init_server_logger() {
    tracing_subscriber::registry()
        .with(env_filter("scholar_etl=info"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .json(),
        )
        .init();
}
