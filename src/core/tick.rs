use crate::domain::model::{PollStats, StatusPolicy, TickOutcome};
use crate::domain::ports::{Fetcher, Storage, UpdateSink};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct StatsCounters {
    ticks: AtomicU64,
    updates: AtomicU64,
    fetch_failures: AtomicU64,
    skipped_statuses: AtomicU64,
    write_failures: AtomicU64,
}

impl StatsCounters {
    pub fn record_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    fn record(&self, outcome: TickOutcome) {
        let counter = match outcome {
            TickOutcome::Updated { .. } => &self.updates,
            TickOutcome::FetchFailed => &self.fetch_failures,
            TickOutcome::StatusSkipped { .. } => &self.skipped_statuses,
            TickOutcome::WriteFailed => &self.write_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> PollStats {
        PollStats {
            ticks: self.ticks.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            skipped_statuses: self.skipped_statuses.load(Ordering::Relaxed),
            write_failures: self.write_failures.load(Ordering::Relaxed),
        }
    }
}

/// One request/write cycle. Cloning is cheap; every tick task owns a clone.
pub struct TickRunner<F: Fetcher, S: Storage> {
    fetcher: Arc<F>,
    storage: Arc<S>,
    sink: Arc<dyn UpdateSink>,
    output_path: Arc<str>,
    status_policy: StatusPolicy,
    stats: Arc<StatsCounters>,
}

impl<F: Fetcher, S: Storage> Clone for TickRunner<F, S> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            storage: Arc::clone(&self.storage),
            sink: Arc::clone(&self.sink),
            output_path: Arc::clone(&self.output_path),
            status_policy: self.status_policy,
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<F: Fetcher, S: Storage> TickRunner<F, S> {
    pub fn new(
        fetcher: F,
        storage: S,
        sink: Arc<dyn UpdateSink>,
        output_path: &str,
        status_policy: StatusPolicy,
    ) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            storage: Arc::new(storage),
            sink,
            output_path: Arc::from(output_path),
            status_policy,
            stats: Arc::new(StatsCounters::default()),
        }
    }

    pub fn stats(&self) -> Arc<StatsCounters> {
        Arc::clone(&self.stats)
    }

    /// Fetch, then overwrite the output file with the body verbatim.
    /// Every failure branch is a no-op: nothing is written and the sink is not called.
    pub async fn run(&self, tick: u64) -> TickOutcome {
        let outcome = self.execute(tick).await;
        self.stats.record(outcome);
        outcome
    }

    async fn execute(&self, tick: u64) -> TickOutcome {
        let fetched = match self.fetcher.fetch().await {
            Ok(fetched) => fetched,
            Err(e) => {
                tracing::debug!(tick, error = %e, "fetch failed; tick dropped");
                return TickOutcome::FetchFailed;
            }
        };

        let fetched = match self.status_policy {
            StatusPolicy::WriteAny => fetched,
            StatusPolicy::SkipErrors => {
                let status = fetched.status;
                match fetched.error_for_status() {
                    Ok(fetched) => fetched,
                    Err(e) => {
                        tracing::debug!(tick, error = %e, "tick dropped");
                        return TickOutcome::StatusSkipped { status };
                    }
                }
            }
        };

        let body = fetched.body;

        if let Err(e) = self.storage.write_file(&self.output_path, &body).await {
            tracing::debug!(tick, error = %e, path = %self.output_path, "write failed; tick dropped");
            return TickOutcome::WriteFailed;
        }

        self.sink.updated(tick, body.len());
        TickOutcome::Updated { bytes: body.len() }
    }
}
