use crate::ports::{Decoder, Fetcher, ResponseStore};
use pokedex_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Cache-aside loader: response store first, fetcher on miss.
///
/// Raw bytes are stored only after they decoded successfully, so a payload
/// that cannot be decoded is never served from cache.
#[derive(Clone)]
pub struct CachedLoader {
    fetcher: Arc<dyn Fetcher>,
    store: Arc<dyn ResponseStore>,
}

impl CachedLoader {
    pub fn new(fetcher: Arc<dyn Fetcher>, store: Arc<dyn ResponseStore>) -> Self {
        Self { fetcher, store }
    }

    pub async fn load<T>(&self, url: &str, decoder: &dyn Decoder<T>) -> Result<T, DomainError> {
        if let Some(bytes) = self.store.get(url) {
            debug!(url = %url, "Cache HIT");
            return decoder.decode(url, &bytes);
        }

        debug!(url = %url, "Cache MISS");
        let bytes = self.fetcher.fetch(url).await?;
        let value = decoder.decode(url, &bytes)?;

        if !self.store.set(url, bytes) {
            debug!(url = %url, "Response not admitted to cache");
        }

        Ok(value)
    }
}
