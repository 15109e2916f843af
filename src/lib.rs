pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{HttpFetcher, LineSink, LocalStorage};
pub use config::PollerConfig;
pub use core::poller::{Poller, PollerHandle};
pub use utils::error::{PollerError, Result};
