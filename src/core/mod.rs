pub mod poller;
pub mod tick;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{FetchedBody, PollSettings, PollStats, StatusPolicy, TickOutcome};
pub use crate::domain::ports::{ConfigProvider, Fetcher, Storage, UpdateSink};
pub use crate::utils::error::Result;
