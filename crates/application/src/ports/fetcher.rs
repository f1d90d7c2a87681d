use async_trait::async_trait;
use bytes::Bytes;
use pokedex_domain::DomainError;

/// Application-layer port for retrieving raw catalog responses.
///
/// Implementations classify failures into `NotFound`, `UnexpectedStatus`,
/// `Timeout` and `Transport`. Dropping the returned future aborts the request.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Bytes, DomainError>;
}
