use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Endpoint answered with non-success status {status}")]
    UnsuccessfulStatusError { status: u16 },

    #[error("Poller runtime error: {message}")]
    RuntimeError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    Runtime,
}

impl PollerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PollerError::HttpError(_) | PollerError::UnsuccessfulStatusError { .. } => {
                ErrorCategory::Network
            }
            PollerError::IoError(_) => ErrorCategory::Storage,
            PollerError::ConfigError { .. }
            | PollerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PollerError::RuntimeError { .. } => ErrorCategory::Runtime,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PollerError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            PollerError::ConfigError { message } => format!("Configuration problem: {}", message),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command-line flags and the TOML file passed with --config"
            }
            ErrorCategory::Network => "Make sure the preview server is running and reachable",
            ErrorCategory::Storage => "Check that the output path is writable",
            ErrorCategory::Runtime => "Restart the poller",
        }
    }
}

pub type Result<T> = std::result::Result<T, PollerError>;
