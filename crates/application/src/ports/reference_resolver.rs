use async_trait::async_trait;
use pokedex_domain::DomainError;

/// Resolves one resource reference (a name or a numeric id) to its detail object.
#[async_trait]
pub trait ReferenceResolver<T>: Send + Sync + 'static {
    async fn resolve(&self, reference: &str) -> Result<T, DomainError>;
}
