use crate::domain::model::FetchedBody;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    /// Replaces the whole file at `path` with `data`.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// What a fetcher needs to know to build its client.
pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self) -> Result<FetchedBody>;
}

/// Receives one call per successful write.
pub trait UpdateSink: Send + Sync {
    fn updated(&self, tick: u64, bytes: usize);
}
