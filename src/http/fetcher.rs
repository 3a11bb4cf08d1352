use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::warn;

use crate::{
    args::DEFAULT_USER_AGENT,
    error::{AppError, AppResult, HttpError},
    metrics::RequestOutcome,
};

/// Performs one GET and reports how it went.
///
/// Implementations never fail: transport problems are folded into
/// [`RequestOutcome::transport_failure`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> RequestOutcome;
}

/// [`Fetcher`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(request_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self::from_client(client))
    }

    #[must_use]
    pub const fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> RequestOutcome {
        let start = Instant::now();
        match execute_get(&self.client, url).await {
            Ok(status) => RequestOutcome::new(status, start.elapsed()),
            Err(err) => {
                warn!("Request to {} failed: {}", url, err);
                RequestOutcome::transport_failure()
            }
        }
    }
}

async fn execute_get(client: &Client, url: &str) -> Result<u16, reqwest::Error> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    drain_response_body(response).await?;
    Ok(status)
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
