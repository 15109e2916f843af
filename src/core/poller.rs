use crate::core::tick::{StatsCounters, TickRunner};
use crate::domain::model::{PollSettings, PollStats};
use crate::domain::ports::{Fetcher, Storage, UpdateSink};
use crate::utils::error::{PollerError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Repeating fetch-and-overwrite loop.
///
/// Ticks never wait for each other: every tick spawns its own task, so a slow
/// request overlaps with the following ones and whichever write lands last
/// wins.
pub struct Poller<F: Fetcher, S: Storage> {
    runner: TickRunner<F, S>,
    interval: Duration,
}

impl<F, S> Poller<F, S>
where
    F: Fetcher + 'static,
    S: Storage + 'static,
{
    /// Fails with `InvalidConfigValueError` when the interval is zero.
    pub fn new(
        fetcher: F,
        storage: S,
        sink: impl UpdateSink + 'static,
        settings: PollSettings,
    ) -> Result<Self> {
        if settings.interval.is_zero() {
            return Err(PollerError::InvalidConfigValueError {
                field: "interval".to_string(),
                value: format!("{:?}", settings.interval),
                reason: "Interval must be greater than zero".to_string(),
            });
        }

        let runner = TickRunner::new(
            fetcher,
            storage,
            Arc::new(sink),
            &settings.output_path,
            settings.status_policy,
        );

        Ok(Self {
            runner,
            interval: settings.interval,
        })
    }

    /// Starts the timer. The first tick fires one full interval from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(self) -> PollerHandle {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let stats = self.runner.stats();

        tracing::info!(interval_ms = self.interval.as_millis() as u64, "poller started");
        let task = tokio::spawn(self.run_loop(shutdown_rx));

        PollerHandle {
            shutdown: Some(shutdown_tx),
            task,
            stats,
        }
    }

    async fn run_loop(self, mut shutdown: oneshot::Receiver<()>) {
        let mut ticker = time::interval_at(Instant::now() + self.interval, self.interval);
        // After a stall, fire once and resume the cadence instead of bursting.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut in_flight = JoinSet::new();
        let mut tick: u64 = 0;

        loop {
            tokio::select! {
                // Fires on an explicit stop and when the handle is dropped.
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    tick += 1;
                    self.runner.stats().record_tick();
                    let runner = self.runner.clone();
                    in_flight.spawn(async move { runner.run(tick).await });
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        if e.is_panic() {
                            tracing::warn!(error = %e, "tick task panicked");
                        }
                    }
                }
            }
        }

        if !in_flight.is_empty() {
            tracing::debug!(abandoned = in_flight.len(), "abandoning in-flight ticks");
        }
        in_flight.shutdown().await;
    }
}

/// Owned handle to a running [`Poller`]. Dropping it stops the timer.
pub struct PollerHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
    stats: Arc<StatsCounters>,
}

impl PollerHandle {
    pub fn stats(&self) -> PollStats {
        self.stats.snapshot()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the timer and aborts ticks still waiting on the network or disk.
    pub async fn stop(mut self) -> Result<PollStats> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        let stats = Arc::clone(&self.stats);
        self.task.await.map_err(|e| PollerError::RuntimeError {
            message: format!("poller loop did not shut down cleanly: {}", e),
        })?;

        let stats = stats.snapshot();
        tracing::info!(
            ticks = stats.ticks,
            updates = stats.updates,
            fetch_failures = stats.fetch_failures,
            skipped_statuses = stats.skipped_statuses,
            write_failures = stats.write_failures,
            "poller stopped"
        );
        Ok(stats)
    }
}
