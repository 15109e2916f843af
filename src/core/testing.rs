//! In-memory doubles for driving ticks without a network or a disk.

use crate::domain::model::FetchedBody;
use crate::domain::ports::{Fetcher, Storage, UpdateSink};
use crate::utils::error::{PollerError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub enum Step {
    Respond { delay: Duration, body: FetchedBody },
    Fail { delay: Duration },
}

impl Step {
    pub fn ok(status: u16, body: &str) -> Self {
        Step::Respond {
            delay: Duration::ZERO,
            body: FetchedBody::new(status, body.as_bytes()),
        }
    }

    pub fn ok_after(delay: Duration, body: &str) -> Self {
        Step::Respond {
            delay,
            body: FetchedBody::new(200, body.as_bytes()),
        }
    }

    pub fn fail() -> Self {
        Step::Fail {
            delay: Duration::ZERO,
        }
    }
}

/// Plays back `steps` in call order; once exhausted, repeats `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedFetcher {
    steps: Arc<Mutex<VecDeque<Step>>>,
    fallback: Step,
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl ScriptedFetcher {
    pub fn new(steps: Vec<Step>) -> Self {
        Self::with_fallback(steps, Step::fail())
    }

    pub fn with_fallback(steps: Vec<Step>, fallback: Step) -> Self {
        Self {
            steps: Arc::new(Mutex::new(steps.into())),
            fallback,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self) -> Result<FetchedBody> {
        self.calls.lock().unwrap().push(Instant::now());
        let step = self
            .steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match step {
            Step::Respond { delay, body } => {
                tokio::time::sleep(delay).await;
                Ok(body)
            }
            Step::Fail { delay } => {
                tokio::time::sleep(delay).await;
                Err(PollerError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )))
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    history: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn seed(&self, path: &str, data: &[u8]) {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_vec());
    }

    pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Every write in completion order.
    pub fn history(&self) -> Vec<Vec<u8>> {
        self.history.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.history.lock().unwrap().len()
    }
}

impl Storage for MemoryStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), data.to_vec());
        self.history.lock().unwrap().push(data.to_vec());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStorage;

impl Storage for FailingStorage {
    async fn write_file(&self, _path: &str, _data: &[u8]) -> Result<()> {
        Err(PollerError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only file system",
        )))
    }
}

#[derive(Debug, Default)]
pub struct CountingSink {
    count: AtomicU64,
    ticks: Mutex<Vec<u64>>,
}

impl CountingSink {
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    pub fn ticks(&self) -> Vec<u64> {
        self.ticks.lock().unwrap().clone()
    }
}

impl UpdateSink for CountingSink {
    fn updated(&self, tick: u64, _bytes: usize) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.ticks.lock().unwrap().push(tick);
    }
}
