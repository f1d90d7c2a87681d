use crate::pagination::{PageFuture, PageWindow, Paginator};
use crate::ports::Decoder;
use crate::services::{CachedLoader, FanOutResolver};
use pokedex_domain::{DomainError, Endpoint, ListRequest, NamedApiResourceList, Resource};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Builds paginators over the collection of kind `T::KIND`.
///
/// Each page costs one upstream call for the reference envelope, then one
/// concurrent detail resolution per reference through the fan-out resolver.
pub struct ListResourcesUseCase<T> {
    loader: CachedLoader,
    endpoint: Arc<Endpoint>,
    list_decoder: Arc<dyn Decoder<NamedApiResourceList>>,
    fan_out: FanOutResolver<T>,
}

impl<T: Resource> ListResourcesUseCase<T> {
    pub fn new(
        loader: CachedLoader,
        endpoint: Arc<Endpoint>,
        list_decoder: Arc<dyn Decoder<NamedApiResourceList>>,
        fan_out: FanOutResolver<T>,
    ) -> Self {
        Self {
            loader,
            endpoint,
            list_decoder,
            fan_out,
        }
    }

    pub fn execute(&self, request: ListRequest) -> Result<Paginator<T>, DomainError> {
        let page_size = request.page_size()?;

        let loader = self.loader.clone();
        let endpoint = Arc::clone(&self.endpoint);
        let list_decoder = Arc::clone(&self.list_decoder);
        let fan_out = self.fan_out.clone();

        Ok(Paginator::new(page_size, move |window: PageWindow, cancel: CancellationToken| {
            let loader = loader.clone();
            let endpoint = Arc::clone(&endpoint);
            let list_decoder = Arc::clone(&list_decoder);
            let fan_out = fan_out.clone();

            let page: PageFuture<T> = Box::pin(async move {
                let url = endpoint.page(T::KIND, window.start, window.len());
                let list = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(DomainError::Cancelled),
                    list = loader.load(&url, list_decoder.as_ref()) => list?,
                };

                debug!(
                    kind = %T::KIND,
                    offset = window.start,
                    references = list.results.len(),
                    total = list.count,
                    "Fetched page references"
                );

                fan_out.resolve(list.names(), &cancel).await
            });
            page
        }))
    }
}
