use crate::cache::{CacheJanitor, CacheStats, ResponseCache};
use crate::decoder::JsonDecoder;
use crate::transport::HttpFetcher;
use async_trait::async_trait;
use bytes::Bytes;
use pokedex_application::pagination::Paginator;
use pokedex_application::ports::{Fetcher, ResponseStore};
use pokedex_application::services::{CachedLoader, FanOutResolver};
use pokedex_application::use_cases::{GetResourceUseCase, ListResourcesUseCase};
use pokedex_domain::{
    Config, DomainError, Endpoint, GetRequest, ListRequest, Nature, Pokemon, Resource, Stat,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Fails every fetch once the owning client is closed, so paginators created
/// before `close()` cannot reach the upstream afterwards.
struct ClosableFetcher {
    inner: Arc<dyn Fetcher>,
    closed: Arc<AtomicBool>,
}

#[async_trait]
impl Fetcher for ClosableFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, DomainError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(DomainError::ClientClosed);
        }
        self.inner.fetch(url).await
    }
}

/// Entry point of the SDK: typed access to natures, pokémon and stats, with
/// every upstream response cached in-process.
///
/// The client is cheap to share behind an `Arc`; every operation takes
/// `&self`. After [`close`](Self::close) every operation fails with
/// `DomainError::ClientClosed`.
pub struct PokedexClient {
    loader: CachedLoader,
    endpoint: Arc<Endpoint>,
    cache: Arc<ResponseCache>,
    closed: Arc<AtomicBool>,
    janitor_shutdown: CancellationToken,
}

impl PokedexClient {
    /// Build a client from an explicit configuration.
    ///
    /// The background compaction task is only started when called from
    /// within a tokio runtime and `compaction_interval_secs` is non-zero.
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        let fetcher = HttpFetcher::new(&config.client).map_err(|e| DomainError::Transport {
            url: config.client.base_url.clone(),
            message: e.to_string(),
        })?;
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Build a client over a custom fetcher.
    pub fn with_fetcher(config: &Config, fetcher: Arc<dyn Fetcher>) -> Result<Self, DomainError> {
        let endpoint = Endpoint::parse(&config.client.base_url).map_err(|e| {
            DomainError::InvalidArgument(format!(
                "base url '{}' cannot be parsed: {}",
                config.client.base_url, e
            ))
        })?;

        let cache = Arc::new(ResponseCache::new(&config.cache));
        let closed = Arc::new(AtomicBool::new(false));
        let fetcher: Arc<dyn Fetcher> = Arc::new(ClosableFetcher {
            inner: fetcher,
            closed: Arc::clone(&closed),
        });
        let store: Arc<dyn ResponseStore> = cache.clone();

        let janitor_shutdown = CancellationToken::new();
        let interval = config.cache.compaction_interval_secs;
        if interval > 0 {
            if tokio::runtime::Handle::try_current().is_ok() {
                CacheJanitor::new(Arc::clone(&cache), Duration::from_secs(interval))
                    .start(janitor_shutdown.clone());
            } else {
                warn!("No tokio runtime available, background cache compaction disabled");
            }
        }

        info!(
            base_url = %endpoint.base(),
            timeout_ms = config.client.timeout_ms,
            "Pokedex client ready"
        );

        Ok(Self {
            loader: CachedLoader::new(fetcher, store),
            endpoint: Arc::new(endpoint),
            cache,
            closed,
            janitor_shutdown,
        })
    }

    pub async fn get<T: Resource>(
        &self,
        request: GetRequest,
        cancel: &CancellationToken,
    ) -> Result<T, DomainError> {
        self.ensure_open()?;
        self.get_use_case::<T>().execute(&request, cancel).await
    }

    /// Paginate over every resource of kind `T::KIND`.
    ///
    /// Each page resolves its references concurrently, one upstream call
    /// per reference not already cached.
    pub fn list<T: Resource>(&self, request: ListRequest) -> Result<Paginator<T>, DomainError> {
        self.ensure_open()?;
        let getter = Arc::new(self.get_use_case::<T>());
        ListResourcesUseCase::new(
            self.loader.clone(),
            Arc::clone(&self.endpoint),
            Arc::new(JsonDecoder),
            FanOutResolver::new(getter),
        )
        .execute(request)
    }

    pub async fn get_nature(
        &self,
        request: GetRequest,
        cancel: &CancellationToken,
    ) -> Result<Nature, DomainError> {
        self.get(request, cancel).await
    }

    pub async fn get_pokemon(
        &self,
        request: GetRequest,
        cancel: &CancellationToken,
    ) -> Result<Pokemon, DomainError> {
        self.get(request, cancel).await
    }

    pub async fn get_stat(
        &self,
        request: GetRequest,
        cancel: &CancellationToken,
    ) -> Result<Stat, DomainError> {
        self.get(request, cancel).await
    }

    pub fn list_natures(&self, request: ListRequest) -> Result<Paginator<Nature>, DomainError> {
        self.list(request)
    }

    pub fn list_pokemon(&self, request: ListRequest) -> Result<Paginator<Pokemon>, DomainError> {
        self.list(request)
    }

    pub fn list_stats(&self, request: ListRequest) -> Result<Paginator<Stat>, DomainError> {
        self.list(request)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Shut the response cache down and reject every later operation.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.janitor_shutdown.cancel();
        self.cache.close();
        info!("Pokedex client closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.is_closed() {
            return Err(DomainError::ClientClosed);
        }
        Ok(())
    }

    fn get_use_case<T: Resource>(&self) -> GetResourceUseCase<T> {
        GetResourceUseCase::new(
            self.loader.clone(),
            Arc::clone(&self.endpoint),
            Arc::new(JsonDecoder),
        )
    }
}

impl Drop for PokedexClient {
    fn drop(&mut self) {
        self.janitor_shutdown.cancel();
    }
}
