use pokedex_application::ports::Decoder;
use pokedex_domain::DomainError;
use serde::de::DeserializeOwned;

/// serde_json decoder for any deserializable payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl<T: DeserializeOwned> Decoder<T> for JsonDecoder {
    fn decode(&self, url: &str, bytes: &[u8]) -> Result<T, DomainError> {
        serde_json::from_slice(bytes).map_err(|e| DomainError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
