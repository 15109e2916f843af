use crate::utils::error::{PollerError, Result};
use std::time::Duration;

/// Raw response of one tick's GET. The body is kept as bytes and never decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchedBody {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Passes 2xx responses through; anything else becomes `UnsuccessfulStatusError`.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(PollerError::UnsuccessfulStatusError {
                status: self.status,
            })
        }
    }
}

/// How a finished tick ended. Only `Updated` produces user-visible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Updated { bytes: usize },
    FetchFailed,
    StatusSkipped { status: u16 },
    WriteFailed,
}

/// What the poller does with a response whose status is not 2xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Status is not inspected; the body is written whatever it is.
    #[default]
    WriteAny,
    /// Non-2xx responses are dropped like a network failure.
    SkipErrors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSettings {
    pub output_path: String,
    pub interval: Duration,
    pub status_policy: StatusPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollStats {
    pub ticks: u64,
    pub updates: u64,
    pub fetch_failures: u64,
    pub skipped_statuses: u64,
    pub write_failures: u64,
}
