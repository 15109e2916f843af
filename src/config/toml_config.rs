use crate::config::PollerConfig;
use crate::utils::error::{PollerError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk configuration. Every key is optional; missing keys keep the value
/// they already had in the [`PollerConfig`] being layered onto.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub source: Option<SourceConfig>,
    pub poll: Option<PollConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PollConfig {
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub skip_error_status: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PollerError::ConfigError {
            message: format!("cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PollerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PollerError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn apply_to(&self, config: &mut PollerConfig) {
        if let Some(source) = &self.source {
            if let Some(endpoint) = &source.endpoint {
                config.endpoint = endpoint.clone();
            }
            if source.timeout_ms.is_some() {
                config.timeout_ms = source.timeout_ms;
            }
        }

        if let Some(interval_ms) = self.poll.as_ref().and_then(|p| p.interval_ms) {
            config.interval_ms = interval_ms;
        }

        if let Some(output) = &self.output {
            if let Some(path) = &output.path {
                config.output_path = path.clone();
            }
            if let Some(skip) = output.skip_error_status {
                config.skip_error_status = skip;
            }
        }
    }

    pub fn into_config(self) -> PollerConfig {
        let mut config = PollerConfig::default();
        self.apply_to(&mut config);
        config
    }
}
