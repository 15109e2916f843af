#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{PollSettings, StatusPolicy};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_endpoint, validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost.nytimes.com:3000/projects/1/embed/teaser";
pub const DEFAULT_OUTPUT_PATH: &str = "src/index.html";
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

/// Fully resolved settings: defaults, then the TOML file, then flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollerConfig {
    pub endpoint: String,
    pub output_path: String,
    pub interval_ms: u64,
    pub timeout_ms: Option<u64>,
    pub skip_error_status: bool,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            timeout_ms: None,
            skip_error_status: false,
        }
    }
}

impl PollerConfig {
    pub fn status_policy(&self) -> StatusPolicy {
        if self.skip_error_status {
            StatusPolicy::SkipErrors
        } else {
            StatusPolicy::WriteAny
        }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            output_path: self.output_path.clone(),
            interval: self.interval(),
            status_policy: self.status_policy(),
        }
    }
}

impl ConfigProvider for PollerConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Validate for PollerConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint("endpoint", &self.endpoint)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("interval_ms", self.interval_ms, 1)?;
        if let Some(timeout_ms) = self.timeout_ms {
            validate_positive_number("timeout_ms", timeout_ms, 1)?;
        }
        Ok(())
    }
}
