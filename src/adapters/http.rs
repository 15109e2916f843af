use crate::domain::model::FetchedBody;
use crate::domain::ports::{ConfigProvider, Fetcher};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Plain GET against a fixed URL: no headers, no query, no body.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    endpoint: String,
}

impl HttpFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.endpoint(), config.request_timeout())
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self) -> Result<FetchedBody> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(FetchedBody::new(status, body.to_vec()))
    }
}
