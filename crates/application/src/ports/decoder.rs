use pokedex_domain::DomainError;

/// Turns raw response bytes into a typed value.
///
/// `url` is only used to label a `DomainError::Decode` failure.
pub trait Decoder<T>: Send + Sync {
    fn decode(&self, url: &str, bytes: &[u8]) -> Result<T, DomainError>;
}
