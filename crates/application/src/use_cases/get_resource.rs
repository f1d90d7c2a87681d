use crate::ports::{Decoder, ReferenceResolver};
use crate::services::CachedLoader;
use async_trait::async_trait;
use pokedex_domain::{DomainError, Endpoint, GetRequest, Resource};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Fetches a single resource of kind `T::KIND` by id or name.
pub struct GetResourceUseCase<T> {
    loader: CachedLoader,
    endpoint: Arc<Endpoint>,
    decoder: Arc<dyn Decoder<T>>,
}

impl<T: Resource> GetResourceUseCase<T> {
    pub fn new(
        loader: CachedLoader,
        endpoint: Arc<Endpoint>,
        decoder: Arc<dyn Decoder<T>>,
    ) -> Self {
        Self {
            loader,
            endpoint,
            decoder,
        }
    }

    pub async fn execute(
        &self,
        request: &GetRequest,
        cancel: &CancellationToken,
    ) -> Result<T, DomainError> {
        let reference = request.resource()?;
        debug!(kind = %T::KIND, reference = %reference, "Getting resource");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(DomainError::Cancelled),
            result = self.resolve(&reference) => result,
        }
    }
}

#[async_trait]
impl<T: Resource> ReferenceResolver<T> for GetResourceUseCase<T> {
    async fn resolve(&self, reference: &str) -> Result<T, DomainError> {
        let url = self.endpoint.detail(T::KIND, reference);
        self.loader.load(&url, self.decoder.as_ref()).await
    }
}
