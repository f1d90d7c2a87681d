use async_trait::async_trait;
use bytes::Bytes;
use pokedex_application::ports::Fetcher;
use pokedex_domain::{ClientConfig, DomainError};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));
const ACCEPT_JSON: &str = "application/json";

/// Plain HTTP GET against the upstream catalog, with pooled connections.
///
/// Every failure is classified into a `DomainError`; nothing is retried here.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(config.timeout())
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(16)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client })
    }

    fn classify(url: &str, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            DomainError::Timeout {
                url: url.to_string(),
            }
        } else {
            DomainError::Transport {
                url: url.to_string(),
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, DomainError> {
        debug!(url = %url, "Sending upstream request");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_JSON)
            .send()
            .await
            .map_err(|e| Self::classify(url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DomainError::NotFound {
                url: url.to_string(),
            });
        }
        if status != StatusCode::OK {
            return Err(DomainError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| Self::classify(url, e))?;

        debug!(
            url = %url,
            response_len = body.len(),
            "Upstream response received"
        );

        Ok(body)
    }
}
