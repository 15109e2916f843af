use crate::config::toml_config::TomlConfig;
use crate::config::PollerConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "preview-poller")]
#[command(about = "Keep a local preview file in sync with a live preview server")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// URL fetched on every tick
    #[arg(long)]
    pub endpoint: Option<String>,

    /// File overwritten with each response body
    #[arg(long)]
    pub output_path: Option<String>,

    /// Milliseconds between ticks
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Per-request timeout in milliseconds (none by default)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Drop non-2xx responses instead of writing their body
    #[arg(long)]
    pub skip_error_status: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit diagnostics as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<PollerConfig> {
        let mut config = PollerConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(output_path) = &self.output_path {
            config.output_path = output_path.clone();
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if self.timeout_ms.is_some() {
            config.timeout_ms = self.timeout_ms;
        }
        if self.skip_error_status {
            config.skip_error_status = true;
        }

        Ok(config)
    }
}
