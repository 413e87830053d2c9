use crate::adapters::http::{DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT};
use crate::config::profiles::default_profiles;
use crate::core::extractor::DEFAULT_LINK_BASE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_provider, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "scholar-etl")]
#[command(about = "Scrape citation profiles into a single JSON payload")]
pub struct CliConfig {
    /// Profile URLs to scrape (defaults to the built-in list)
    #[arg(long, value_delimiter = ',')]
    pub profiles: Vec<String>,

    /// Load settings from a TOML file instead of the flags below
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json,csv")]
    pub output_formats: Vec<String>,

    #[arg(long, help = "Bundle the outputs into a ZIP archive")]
    pub compress: bool,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_secs: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(long, default_value = DEFAULT_LINK_BASE)]
    pub link_base: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

impl CliConfig {
    /// 沒有指定 --profiles 時使用內建清單
    pub fn with_default_profiles(mut self) -> Self {
        if self.profiles.is_empty() {
            self.profiles = default_profiles();
        }
        self
    }
}

impl ConfigProvider for CliConfig {
    fn profiles(&self) -> &[String] {
        &self.profiles
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }

    fn compress(&self) -> bool {
        self.compress
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_secs
    }

    fn link_base(&self) -> &str {
        &self.link_base
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
